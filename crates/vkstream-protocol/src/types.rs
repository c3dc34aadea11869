//! Type model shared by the codec, the call descriptors and the diagnostic printer.

use std::fmt;

use crate::names::{EnumTable, FlagTable};
use crate::stream::{IntSpec, StringEncoding};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// Selects a driver function table (instance, physical device, device, queue, command buffer).
    Dispatchable,
    /// Merely names a driver object.
    NonDispatchable,
}

/// Object types that travel as handles. The discriminant doubles as the type tag baked into boxed
/// ids, so it must never be zero.
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandleType {
    Instance = 1,
    PhysicalDevice = 2,
    Device = 3,
    Queue = 4,
    Buffer = 5,
    Image = 6,
    DeviceMemory = 7,
    CommandBuffer = 8,
    ImageView = 9,
    ShaderModule = 10,
    DescriptorSetLayout = 11,
    DescriptorPool = 12,
    DescriptorSet = 13,
    Semaphore = 14,
    Sampler = 15,
    Event = 16,
    RenderPass = 17,
    Framebuffer = 18,
    PipelineLayout = 19,
    PipelineCache = 20,
    Pipeline = 21,
    Fence = 22,
    BufferView = 23,
    QueryPool = 24,
    CommandPool = 33,
}

impl HandleType {
    pub const fn tag(self) -> u16 {
        self as u16
    }

    pub const fn from_tag(tag: u16) -> Option<Self> {
        match tag {
            1 => Some(Self::Instance),
            2 => Some(Self::PhysicalDevice),
            3 => Some(Self::Device),
            4 => Some(Self::Queue),
            5 => Some(Self::Buffer),
            6 => Some(Self::Image),
            7 => Some(Self::DeviceMemory),
            8 => Some(Self::CommandBuffer),
            9 => Some(Self::ImageView),
            10 => Some(Self::ShaderModule),
            11 => Some(Self::DescriptorSetLayout),
            12 => Some(Self::DescriptorPool),
            13 => Some(Self::DescriptorSet),
            14 => Some(Self::Semaphore),
            15 => Some(Self::Sampler),
            16 => Some(Self::Event),
            17 => Some(Self::RenderPass),
            18 => Some(Self::Framebuffer),
            19 => Some(Self::PipelineLayout),
            20 => Some(Self::PipelineCache),
            21 => Some(Self::Pipeline),
            22 => Some(Self::Fence),
            23 => Some(Self::BufferView),
            24 => Some(Self::QueryPool),
            33 => Some(Self::CommandPool),
            _ => None,
        }
    }

    pub const fn kind(self) -> HandleKind {
        match self {
            Self::Instance
            | Self::PhysicalDevice
            | Self::Device
            | Self::Queue
            | Self::CommandBuffer => HandleKind::Dispatchable,
            _ => HandleKind::NonDispatchable,
        }
    }

    pub const fn is_dispatchable(self) -> bool {
        matches!(self.kind(), HandleKind::Dispatchable)
    }

    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Instance => "VkInstance",
            Self::PhysicalDevice => "VkPhysicalDevice",
            Self::Device => "VkDevice",
            Self::Queue => "VkQueue",
            Self::Buffer => "VkBuffer",
            Self::Image => "VkImage",
            Self::DeviceMemory => "VkDeviceMemory",
            Self::CommandBuffer => "VkCommandBuffer",
            Self::ImageView => "VkImageView",
            Self::ShaderModule => "VkShaderModule",
            Self::DescriptorSetLayout => "VkDescriptorSetLayout",
            Self::DescriptorPool => "VkDescriptorPool",
            Self::DescriptorSet => "VkDescriptorSet",
            Self::Semaphore => "VkSemaphore",
            Self::Sampler => "VkSampler",
            Self::Event => "VkEvent",
            Self::RenderPass => "VkRenderPass",
            Self::Framebuffer => "VkFramebuffer",
            Self::PipelineLayout => "VkPipelineLayout",
            Self::PipelineCache => "VkPipelineCache",
            Self::Pipeline => "VkPipeline",
            Self::Fence => "VkFence",
            Self::BufferView => "VkBufferView",
            Self::QueryPool => "VkQueryPool",
            Self::CommandPool => "VkCommandPool",
        }
    }
}

/// How a handle field is translated while it is being read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HandleMapping {
    /// Boxed id in, raw driver value out.
    #[default]
    Normal,
    /// The wire value is kept as-is.
    Disabled,
    /// The entry is destroyed and unboxed; the boxed id stays readable until the packet ends.
    PreserveForTrace,
}

/// Translation seam between wire handle values and whatever the caller maps them to.
pub trait HandleMapper {
    fn map_read(
        &mut self,
        ty: HandleType,
        value: u64,
        mapping: HandleMapping,
    ) -> Result<u64, Box<dyn std::error::Error + Send + Sync>>;
}

/// Identity mapper for tooling that never touches live objects.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHandleMapping;

impl HandleMapper for NoHandleMapping {
    fn map_read(
        &mut self,
        _ty: HandleType,
        value: u64,
        _mapping: HandleMapping,
    ) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        Ok(value)
    }
}

/// Element type of a field.
#[derive(Clone, Copy, Debug)]
pub enum FieldType {
    Int(IntSpec),
    Float32,
    Enum(&'static EnumTable),
    Flags(&'static FlagTable),
    Handle(HandleType),
    Str(StringEncoding),
    Struct(&'static StructSchema),
}

/// How many elements a field carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Count {
    One,
    /// Counted by a previously decoded sibling (dotted paths reach into sibling structs). The
    /// element count is `ceil(value / divisor)`.
    Field {
        name: &'static str,
        divisor: u64,
    },
    Fixed(usize),
}

#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    /// Preceded by the 8-byte null sentinel.
    pub optional: bool,
    pub count: Count,
}

impl FieldSpec {
    pub const fn new(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            optional: false,
            count: Count::One,
        }
    }

    pub const fn int(name: &'static str, spec: IntSpec) -> Self {
        Self::new(name, FieldType::Int(spec))
    }

    pub const fn u32(name: &'static str) -> Self {
        Self::int(name, IntSpec::U32)
    }

    pub const fn u64(name: &'static str) -> Self {
        Self::int(name, IntSpec::U64)
    }

    pub const fn f32(name: &'static str) -> Self {
        Self::new(name, FieldType::Float32)
    }

    pub const fn handle(name: &'static str, ty: HandleType) -> Self {
        Self::new(name, FieldType::Handle(ty))
    }

    pub const fn enumeration(name: &'static str, table: &'static EnumTable) -> Self {
        Self::new(name, FieldType::Enum(table))
    }

    pub const fn flags(name: &'static str, table: &'static FlagTable) -> Self {
        Self::new(name, FieldType::Flags(table))
    }

    pub const fn structure(name: &'static str, schema: &'static StructSchema) -> Self {
        Self::new(name, FieldType::Struct(schema))
    }

    pub const fn string(name: &'static str, encoding: StringEncoding) -> Self {
        Self::new(name, FieldType::Str(encoding))
    }

    pub const fn optional(self) -> Self {
        Self {
            optional: true,
            ..self
        }
    }

    pub const fn counted_by(self, name: &'static str) -> Self {
        self.counted_by_div(name, 1)
    }

    pub const fn counted_by_div(self, name: &'static str, divisor: u64) -> Self {
        Self {
            count: Count::Field { name, divisor },
            ..self
        }
    }

    pub const fn fixed(self, n: usize) -> Self {
        Self {
            count: Count::Fixed(n),
            ..self
        }
    }

    pub const fn is_array(&self) -> bool {
        !matches!(self.count, Count::One)
    }

    pub const fn handle_type(&self) -> Option<HandleType> {
        match self.ty {
            FieldType::Handle(ty) => Some(ty),
            _ => None,
        }
    }
}

/// Layout of a nested structure.
#[derive(Debug)]
pub struct StructSchema {
    pub name: &'static str,
    /// Expected `sType` for extensible structures; such structures also carry an extension-chain
    /// length right after the tag.
    pub s_type: Option<u32>,
    pub fields: &'static [FieldSpec],
}

/// A decoded field value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    UInt(u64),
    SInt(i64),
    Float(f32),
    Enum(u32),
    Flags(u32),
    Handle(u64),
    Str(String),
    Struct(Record),
    Array(Vec<Value>),
    /// Optional field whose sentinel was zero.
    Absent,
}

impl Value {
    /// Integer view used for counts, sizes and offsets.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Value::UInt(v) | Value::Handle(v) => Some(v),
            Value::SInt(v) => u64::try_from(v).ok(),
            Value::Enum(v) | Value::Flags(v) => Some(u64::from(v)),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Struct(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Visits every handle leaf in wire order.
    pub fn for_each_handle_mut(&mut self, f: &mut dyn FnMut(&mut u64)) {
        match self {
            Value::Handle(h) => f(h),
            Value::Array(values) => values.iter_mut().for_each(|v| v.for_each_handle_mut(f)),
            Value::Struct(record) => record
                .fields
                .iter_mut()
                .for_each(|field| field.value.for_each_handle_mut(f)),
            _ => {}
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::UInt(v) => write!(f, "{v:#x}"),
            Value::SInt(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v:?}"),
            Value::Enum(v) => write!(f, "{v}"),
            Value::Flags(v) => write!(f, "{v:#x}"),
            Value::Handle(v) => write!(f, "{v:#x}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Struct(record) => write!(f, "{record}"),
            Value::Array(values) => {
                f.write_str("[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Value::Absent => f.write_str("null"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub value: Value,
}

/// Ordered named values: the parameters of a call or the members of a structure.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    pub fields: Vec<Field>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &'static str, value: Value) {
        self.fields.push(Field { name, value });
    }

    pub fn with(mut self, name: &'static str, value: Value) -> Self {
        self.push(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.fields
            .iter_mut()
            .find(|f| f.name == name)
            .map(|f| &mut f.value)
    }

    /// Resolves `a.b.c` through nested structures.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let mut value = self.get(parts.next()?)?;
        for part in parts {
            value = value.as_record()?.get(part)?;
        }
        Some(value)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", field.name, field.value)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_tags_round_trip_and_are_non_zero() {
        for tag in 0..=u16::from(u8::MAX) {
            if let Some(ty) = HandleType::from_tag(tag) {
                assert_ne!(ty.tag(), 0);
                assert_eq!(ty.tag(), tag);
            }
        }
        assert!(HandleType::CommandBuffer.is_dispatchable());
        assert!(!HandleType::Buffer.is_dispatchable());
    }

    #[test]
    fn lookup_follows_dotted_paths() {
        let info = Record::new().with("descriptorSetCount", Value::UInt(3));
        let params = Record::new()
            .with("device", Value::Handle(1))
            .with("pAllocateInfo", Value::Struct(info));
        assert_eq!(
            params
                .lookup("pAllocateInfo.descriptorSetCount")
                .and_then(Value::as_u64),
            Some(3)
        );
        assert_eq!(params.lookup("pAllocateInfo.missing"), None);
        assert_eq!(params.lookup("device.inner"), None);
    }

    #[test]
    fn handle_visitor_reaches_nested_leaves() {
        let mut value = Value::Struct(
            Record::new()
                .with("a", Value::Handle(1))
                .with("b", Value::Array(vec![Value::Handle(2), Value::UInt(9)])),
        );
        let mut seen = Vec::new();
        value.for_each_handle_mut(&mut |h| {
            seen.push(*h);
            *h += 10;
        });
        assert_eq!(seen, vec![1, 2]);
        assert_eq!(
            value.as_record().unwrap().get("a"),
            Some(&Value::Handle(11))
        );
    }
}
