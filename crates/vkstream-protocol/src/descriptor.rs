//! Static per-call metadata.
//!
//! Every [`Opcode`] maps to exactly one [`CallDescriptor`]; [`Opcode::descriptor`] is an
//! exhaustive match, so a new opcode without a descriptor does not compile.

use bitflags::bitflags;

use crate::codec;
use crate::error::{Result, WireError};
use crate::names::*;
use crate::opcode::Opcode;
use crate::schema::*;
use crate::stream::{IntSpec, WireReader, WireWriter};
use crate::types::{
    FieldSpec as F, HandleMapper, HandleMapping, HandleType, HandleType as H, Record,
};

/// One call parameter and its role in the handle lifecycle.
#[derive(Clone, Copy, Debug)]
pub struct ParamSpec {
    pub field: F,
    /// The parameter receives newly created handles.
    pub creates: bool,
    /// The parameter names handles the call destroys.
    pub destroys: bool,
    /// Written back to the guest after the call returns.
    pub output: bool,
}

impl ParamSpec {
    pub const fn input(field: F) -> Self {
        Self {
            field,
            creates: false,
            destroys: false,
            output: false,
        }
    }

    pub const fn output(field: F) -> Self {
        Self {
            output: true,
            ..Self::input(field)
        }
    }

    pub const fn creates(self) -> Self {
        Self {
            creates: true,
            ..self
        }
    }

    pub const fn destroys(self) -> Self {
        Self {
            destroys: true,
            ..self
        }
    }

    pub const fn name(&self) -> &'static str {
        self.field.name
    }

    /// Whether writeback boxes the raw handles in this parameter.
    pub fn creates_non_dispatchable(&self) -> bool {
        self.creates
            && self
                .field
                .handle_type()
                .is_some_and(|ty| !ty.is_dispatchable())
    }
}

/// Which decode routine runs a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeRoute {
    /// Field-driven decode, driver dispatch, autoboxed writeback.
    Generic,
    /// Dispatched through the global state, which owns boxing for the call.
    GlobalState,
    /// Guest-written bytes for each mapped range follow the parameters.
    FlushMappedRanges,
    /// Host bytes for each mapped range are appended to the writeback.
    InvalidateMappedRanges,
}

bitflags! {
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct CallFlags: u32 {
        /// Dispatch holds the process-wide driver workaround lock.
        const DRIVER_WORKAROUND_LOCK = 1 << 0;
        /// Recorded into a command buffer; captures omit the sequence number and the command
        /// buffer itself.
        const COMMAND_BUFFER_SCOPE = 1 << 1;
    }
}

#[derive(Debug)]
pub struct CallDescriptor {
    pub opcode: Opcode,
    pub name: &'static str,
    pub params: &'static [ParamSpec],
    /// Width of the trailing return value; `None` for calls returning nothing.
    pub ret: Option<IntSpec>,
    pub route: DecodeRoute,
    pub flags: CallFlags,
}

impl CallDescriptor {
    /// Base descriptor for struct-update syntax: no parameters, generic route, no flags.
    const fn new(opcode: Opcode, ret: Option<IntSpec>) -> Self {
        Self {
            opcode,
            name: opcode.name(),
            params: &[],
            ret,
            route: DecodeRoute::Generic,
            flags: CallFlags::empty(),
        }
    }

    /// The leading dispatchable handle that selects the driver table, if the call has one.
    pub fn dispatch_param(&self) -> Option<(&'static ParamSpec, HandleType)> {
        let first = self.params.first()?;
        let ty = first.field.handle_type()?;
        (ty.is_dispatchable() && !first.field.is_array() && !first.field.optional)
            .then_some((first, ty))
    }

    pub fn is_command_buffer_scoped(&self) -> bool {
        self.flags.contains(CallFlags::COMMAND_BUFFER_SCOPE)
    }

    /// Parameters in the order a capture records them.
    pub fn capture_params(&self) -> &'static [ParamSpec] {
        if self.is_command_buffer_scoped() {
            self.params.get(1..).unwrap_or_default()
        } else {
            self.params
        }
    }

    pub fn outputs(&self) -> impl Iterator<Item = (usize, &'static ParamSpec)> {
        self.params.iter().enumerate().filter(|(_, p)| p.output)
    }

    /// Guest side of the call: writes every parameter of `params` in order, handles verbatim.
    pub fn encode_params(&self, w: &mut WireWriter, params: &Record) -> Result<()> {
        for param in self.params {
            let value = params
                .get(param.name())
                .ok_or(WireError::ValueMismatch { field: param.name() })?;
            codec::encode_field(w, &param.field, value, params)?;
        }
        Ok(())
    }

    /// Reads every parameter with one mapping mode. The host decoder picks modes per parameter
    /// instead.
    pub fn decode_params(
        &self,
        r: &mut WireReader<'_>,
        mapper: &mut dyn HandleMapper,
        mapping: HandleMapping,
    ) -> Result<Record> {
        let mut params = Record::new();
        for param in self.params {
            let value = codec::decode_field(r, &param.field, &params, mapper, mapping)?;
            params.push(param.name(), value);
        }
        Ok(params)
    }
}

impl Opcode {
    pub fn descriptor(self) -> &'static CallDescriptor {
        use Opcode::*;
        match self {
            CreateInstance => &CREATE_INSTANCE,
            DestroyInstance => &DESTROY_INSTANCE,
            EnumeratePhysicalDevices => &ENUMERATE_PHYSICAL_DEVICES,
            GetPhysicalDeviceFormatProperties => &GET_PHYSICAL_DEVICE_FORMAT_PROPERTIES,
            CreateDevice => &CREATE_DEVICE,
            DestroyDevice => &DESTROY_DEVICE,
            GetDeviceQueue => &GET_DEVICE_QUEUE,
            QueueSubmit => &QUEUE_SUBMIT,
            QueueWaitIdle => &QUEUE_WAIT_IDLE,
            DeviceWaitIdle => &DEVICE_WAIT_IDLE,
            AllocateMemory => &ALLOCATE_MEMORY,
            FreeMemory => &FREE_MEMORY,
            FlushMappedMemoryRanges => &FLUSH_MAPPED_MEMORY_RANGES,
            InvalidateMappedMemoryRanges => &INVALIDATE_MAPPED_MEMORY_RANGES,
            BindBufferMemory => &BIND_BUFFER_MEMORY,
            BindImageMemory => &BIND_IMAGE_MEMORY,
            GetBufferMemoryRequirements => &GET_BUFFER_MEMORY_REQUIREMENTS,
            GetImageMemoryRequirements => &GET_IMAGE_MEMORY_REQUIREMENTS,
            CreateFence => &CREATE_FENCE,
            DestroyFence => &DESTROY_FENCE,
            ResetFences => &RESET_FENCES,
            GetFenceStatus => &GET_FENCE_STATUS,
            WaitForFences => &WAIT_FOR_FENCES,
            CreateSemaphore => &CREATE_SEMAPHORE,
            DestroySemaphore => &DESTROY_SEMAPHORE,
            CreateBuffer => &CREATE_BUFFER,
            DestroyBuffer => &DESTROY_BUFFER,
            CreateImage => &CREATE_IMAGE,
            DestroyImage => &DESTROY_IMAGE,
            CreateImageView => &CREATE_IMAGE_VIEW,
            DestroyImageView => &DESTROY_IMAGE_VIEW,
            CreateShaderModule => &CREATE_SHADER_MODULE,
            DestroyShaderModule => &DESTROY_SHADER_MODULE,
            CreatePipelineCache => &CREATE_PIPELINE_CACHE,
            DestroyPipelineCache => &DESTROY_PIPELINE_CACHE,
            CreateGraphicsPipelines => &CREATE_GRAPHICS_PIPELINES,
            DestroyPipeline => &DESTROY_PIPELINE,
            CreatePipelineLayout => &CREATE_PIPELINE_LAYOUT,
            DestroyPipelineLayout => &DESTROY_PIPELINE_LAYOUT,
            CreateSampler => &CREATE_SAMPLER,
            DestroySampler => &DESTROY_SAMPLER,
            CreateDescriptorSetLayout => &CREATE_DESCRIPTOR_SET_LAYOUT,
            DestroyDescriptorSetLayout => &DESTROY_DESCRIPTOR_SET_LAYOUT,
            CreateDescriptorPool => &CREATE_DESCRIPTOR_POOL,
            DestroyDescriptorPool => &DESTROY_DESCRIPTOR_POOL,
            AllocateDescriptorSets => &ALLOCATE_DESCRIPTOR_SETS,
            UpdateDescriptorSets => &UPDATE_DESCRIPTOR_SETS,
            CreateFramebuffer => &CREATE_FRAMEBUFFER,
            DestroyFramebuffer => &DESTROY_FRAMEBUFFER,
            CreateRenderPass => &CREATE_RENDER_PASS,
            DestroyRenderPass => &DESTROY_RENDER_PASS,
            CreateCommandPool => &CREATE_COMMAND_POOL,
            DestroyCommandPool => &DESTROY_COMMAND_POOL,
            AllocateCommandBuffers => &ALLOCATE_COMMAND_BUFFERS,
            FreeCommandBuffers => &FREE_COMMAND_BUFFERS,
            BeginCommandBuffer => &BEGIN_COMMAND_BUFFER,
            EndCommandBuffer => &END_COMMAND_BUFFER,
            CmdBindPipeline => &CMD_BIND_PIPELINE,
            CmdSetViewport => &CMD_SET_VIEWPORT,
            CmdSetScissor => &CMD_SET_SCISSOR,
            CmdBindDescriptorSets => &CMD_BIND_DESCRIPTOR_SETS,
            CmdBindIndexBuffer => &CMD_BIND_INDEX_BUFFER,
            CmdBindVertexBuffers => &CMD_BIND_VERTEX_BUFFERS,
            CmdDraw => &CMD_DRAW,
            CmdDrawIndexed => &CMD_DRAW_INDEXED,
            CmdCopyBufferToImage => &CMD_COPY_BUFFER_TO_IMAGE,
            CmdCopyImageToBuffer => &CMD_COPY_IMAGE_TO_BUFFER,
            CmdClearColorImage => &CMD_CLEAR_COLOR_IMAGE,
            CmdClearAttachments => &CMD_CLEAR_ATTACHMENTS,
            CmdPipelineBarrier => &CMD_PIPELINE_BARRIER,
            CmdBeginRenderPass => &CMD_BEGIN_RENDER_PASS,
            CmdEndRenderPass => &CMD_END_RENDER_PASS,
        }
    }
}

/// Looks up the descriptor for a raw wire opcode.
pub fn descriptor_for(opcode: u32) -> Option<&'static CallDescriptor> {
    Opcode::from_u32(opcode).map(Opcode::descriptor)
}

const RESULT: Option<IntSpec> = Some(IntSpec::I32);
const VOID: Option<IntSpec> = None;

const GLOBAL: DecodeRoute = DecodeRoute::GlobalState;
const CMD: CallFlags = CallFlags::COMMAND_BUFFER_SCOPE;

const fn input(field: F) -> ParamSpec {
    ParamSpec::input(field)
}

const fn handle(name: &'static str, ty: HandleType) -> ParamSpec {
    ParamSpec::input(F::handle(name, ty))
}

const fn created(name: &'static str, ty: HandleType) -> ParamSpec {
    ParamSpec::output(F::handle(name, ty)).creates()
}

const fn destroyed(name: &'static str, ty: HandleType) -> ParamSpec {
    ParamSpec::input(F::handle(name, ty)).destroys()
}

const fn count(name: &'static str) -> ParamSpec {
    ParamSpec::input(F::u32(name))
}

macro_rules! allocator {
    () => {
        input(F::structure("pAllocator", &ALLOCATION_CALLBACKS).optional())
    };
}

macro_rules! create_info {
    ($schema:expr) => {
        input(F::structure("pCreateInfo", &$schema))
    };
}

static CREATE_INSTANCE: CallDescriptor = CallDescriptor {
    params: &[
        create_info!(INSTANCE_CREATE_INFO),
        allocator!(),
        created("pInstance", H::Instance),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::CreateInstance, RESULT)
};

static DESTROY_INSTANCE: CallDescriptor = CallDescriptor {
    params: &[
        handle("instance", H::Instance),
        allocator!(),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::DestroyInstance, VOID)
};

static ENUMERATE_PHYSICAL_DEVICES: CallDescriptor = CallDescriptor {
    params: &[
        handle("instance", H::Instance),
        ParamSpec::output(F::u32("pPhysicalDeviceCount").optional()),
        ParamSpec::output(
            F::handle("pPhysicalDevices", H::PhysicalDevice)
                .optional()
                .counted_by("pPhysicalDeviceCount"),
        )
        .creates(),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::EnumeratePhysicalDevices, RESULT)
};

static GET_PHYSICAL_DEVICE_FORMAT_PROPERTIES: CallDescriptor = CallDescriptor {
    params: &[
        handle("physicalDevice", H::PhysicalDevice),
        input(F::enumeration("format", &FORMAT)),
        ParamSpec::output(F::structure("pFormatProperties", &FORMAT_PROPERTIES)),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::GetPhysicalDeviceFormatProperties, VOID)
};

static CREATE_DEVICE: CallDescriptor = CallDescriptor {
    params: &[
        handle("physicalDevice", H::PhysicalDevice),
        create_info!(DEVICE_CREATE_INFO),
        allocator!(),
        created("pDevice", H::Device),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::CreateDevice, RESULT)
};

static DESTROY_DEVICE: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        allocator!(),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::DestroyDevice, VOID)
};

static GET_DEVICE_QUEUE: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        count("queueFamilyIndex"),
        count("queueIndex"),
        created("pQueue", H::Queue),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::GetDeviceQueue, VOID)
};

static QUEUE_SUBMIT: CallDescriptor = CallDescriptor {
    params: &[
        handle("queue", H::Queue),
        count("submitCount"),
        input(F::structure("pSubmits", &SUBMIT_INFO).counted_by("submitCount")),
        handle("fence", H::Fence),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::QueueSubmit, RESULT)
};

static QUEUE_WAIT_IDLE: CallDescriptor = CallDescriptor {
    params: &[
        handle("queue", H::Queue),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::QueueWaitIdle, RESULT)
};

static DEVICE_WAIT_IDLE: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
    ],
    ..CallDescriptor::new(Opcode::DeviceWaitIdle, RESULT)
};

static ALLOCATE_MEMORY: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        input(F::structure("pAllocateInfo", &MEMORY_ALLOCATE_INFO)),
        allocator!(),
        created("pMemory", H::DeviceMemory),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::AllocateMemory, RESULT)
};

static FREE_MEMORY: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        destroyed("memory", H::DeviceMemory),
        allocator!(),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::FreeMemory, VOID)
};

static FLUSH_MAPPED_MEMORY_RANGES: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        count("memoryRangeCount"),
        input(F::structure("pMemoryRanges", &MAPPED_MEMORY_RANGE).counted_by("memoryRangeCount")),
    ],
    route: DecodeRoute::FlushMappedRanges,
    ..CallDescriptor::new(Opcode::FlushMappedMemoryRanges, RESULT)
};

static INVALIDATE_MAPPED_MEMORY_RANGES: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        count("memoryRangeCount"),
        input(F::structure("pMemoryRanges", &MAPPED_MEMORY_RANGE).counted_by("memoryRangeCount")),
    ],
    route: DecodeRoute::InvalidateMappedRanges,
    ..CallDescriptor::new(Opcode::InvalidateMappedMemoryRanges, RESULT)
};

static BIND_BUFFER_MEMORY: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        handle("buffer", H::Buffer),
        handle("memory", H::DeviceMemory),
        input(F::u64("memoryOffset")),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::BindBufferMemory, RESULT)
};

static BIND_IMAGE_MEMORY: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        handle("image", H::Image),
        handle("memory", H::DeviceMemory),
        input(F::u64("memoryOffset")),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::BindImageMemory, RESULT)
};

static GET_BUFFER_MEMORY_REQUIREMENTS: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        handle("buffer", H::Buffer),
        ParamSpec::output(F::structure("pMemoryRequirements", &MEMORY_REQUIREMENTS)),
    ],
    ..CallDescriptor::new(Opcode::GetBufferMemoryRequirements, VOID)
};

static GET_IMAGE_MEMORY_REQUIREMENTS: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        handle("image", H::Image),
        ParamSpec::output(F::structure("pMemoryRequirements", &MEMORY_REQUIREMENTS)),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::GetImageMemoryRequirements, VOID)
};

static CREATE_FENCE: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        create_info!(FENCE_CREATE_INFO),
        allocator!(),
        created("pFence", H::Fence),
    ],
    ..CallDescriptor::new(Opcode::CreateFence, RESULT)
};

static DESTROY_FENCE: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        destroyed("fence", H::Fence),
        allocator!(),
    ],
    ..CallDescriptor::new(Opcode::DestroyFence, VOID)
};

static RESET_FENCES: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        count("fenceCount"),
        input(F::handle("pFences", H::Fence).counted_by("fenceCount")),
    ],
    ..CallDescriptor::new(Opcode::ResetFences, RESULT)
};

static GET_FENCE_STATUS: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        handle("fence", H::Fence),
    ],
    ..CallDescriptor::new(Opcode::GetFenceStatus, RESULT)
};

static WAIT_FOR_FENCES: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        count("fenceCount"),
        input(F::handle("pFences", H::Fence).counted_by("fenceCount")),
        input(F::u32("waitAll")),
        input(F::u64("timeout")),
    ],
    ..CallDescriptor::new(Opcode::WaitForFences, RESULT)
};

static CREATE_SEMAPHORE: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        create_info!(SEMAPHORE_CREATE_INFO),
        allocator!(),
        created("pSemaphore", H::Semaphore),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::CreateSemaphore, RESULT)
};

static DESTROY_SEMAPHORE: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        destroyed("semaphore", H::Semaphore),
        allocator!(),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::DestroySemaphore, VOID)
};

static CREATE_BUFFER: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        create_info!(BUFFER_CREATE_INFO),
        allocator!(),
        created("pBuffer", H::Buffer),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::CreateBuffer, RESULT)
};

static DESTROY_BUFFER: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        destroyed("buffer", H::Buffer),
        allocator!(),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::DestroyBuffer, VOID)
};

static CREATE_IMAGE: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        create_info!(IMAGE_CREATE_INFO),
        allocator!(),
        created("pImage", H::Image),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::CreateImage, RESULT)
};

static DESTROY_IMAGE: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        destroyed("image", H::Image),
        allocator!(),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::DestroyImage, VOID)
};

static CREATE_IMAGE_VIEW: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        create_info!(IMAGE_VIEW_CREATE_INFO),
        allocator!(),
        created("pView", H::ImageView),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::CreateImageView, RESULT)
};

static DESTROY_IMAGE_VIEW: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        destroyed("imageView", H::ImageView),
        allocator!(),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::DestroyImageView, VOID)
};

static CREATE_SHADER_MODULE: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        create_info!(SHADER_MODULE_CREATE_INFO),
        allocator!(),
        created("pShaderModule", H::ShaderModule),
    ],
    ..CallDescriptor::new(Opcode::CreateShaderModule, RESULT)
};

static DESTROY_SHADER_MODULE: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        destroyed("shaderModule", H::ShaderModule),
        allocator!(),
    ],
    ..CallDescriptor::new(Opcode::DestroyShaderModule, VOID)
};

static CREATE_PIPELINE_CACHE: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        create_info!(PIPELINE_CACHE_CREATE_INFO),
        allocator!(),
        created("pPipelineCache", H::PipelineCache),
    ],
    ..CallDescriptor::new(Opcode::CreatePipelineCache, RESULT)
};

static DESTROY_PIPELINE_CACHE: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        destroyed("pipelineCache", H::PipelineCache),
        allocator!(),
    ],
    ..CallDescriptor::new(Opcode::DestroyPipelineCache, VOID)
};

static CREATE_GRAPHICS_PIPELINES: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        handle("pipelineCache", H::PipelineCache),
        count("createInfoCount"),
        input(
            F::structure("pCreateInfos", &GRAPHICS_PIPELINE_CREATE_INFO)
                .counted_by("createInfoCount"),
        ),
        allocator!(),
        ParamSpec::output(F::handle("pPipelines", H::Pipeline).counted_by("createInfoCount"))
            .creates(),
    ],
    ..CallDescriptor::new(Opcode::CreateGraphicsPipelines, RESULT)
};

static DESTROY_PIPELINE: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        destroyed("pipeline", H::Pipeline),
        allocator!(),
    ],
    ..CallDescriptor::new(Opcode::DestroyPipeline, VOID)
};

static CREATE_PIPELINE_LAYOUT: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        create_info!(PIPELINE_LAYOUT_CREATE_INFO),
        allocator!(),
        created("pPipelineLayout", H::PipelineLayout),
    ],
    flags: CallFlags::DRIVER_WORKAROUND_LOCK,
    ..CallDescriptor::new(Opcode::CreatePipelineLayout, RESULT)
};

static DESTROY_PIPELINE_LAYOUT: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        destroyed("pipelineLayout", H::PipelineLayout),
        allocator!(),
    ],
    flags: CallFlags::DRIVER_WORKAROUND_LOCK,
    ..CallDescriptor::new(Opcode::DestroyPipelineLayout, VOID)
};

static CREATE_SAMPLER: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        create_info!(SAMPLER_CREATE_INFO),
        allocator!(),
        created("pSampler", H::Sampler),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::CreateSampler, RESULT)
};

static DESTROY_SAMPLER: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        destroyed("sampler", H::Sampler),
        allocator!(),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::DestroySampler, VOID)
};

static CREATE_DESCRIPTOR_SET_LAYOUT: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        create_info!(DESCRIPTOR_SET_LAYOUT_CREATE_INFO),
        allocator!(),
        created("pSetLayout", H::DescriptorSetLayout),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::CreateDescriptorSetLayout, RESULT)
};

static DESTROY_DESCRIPTOR_SET_LAYOUT: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        destroyed("descriptorSetLayout", H::DescriptorSetLayout),
        allocator!(),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::DestroyDescriptorSetLayout, VOID)
};

static CREATE_DESCRIPTOR_POOL: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        create_info!(DESCRIPTOR_POOL_CREATE_INFO),
        allocator!(),
        created("pDescriptorPool", H::DescriptorPool),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::CreateDescriptorPool, RESULT)
};

static DESTROY_DESCRIPTOR_POOL: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        destroyed("descriptorPool", H::DescriptorPool),
        allocator!(),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::DestroyDescriptorPool, VOID)
};

static ALLOCATE_DESCRIPTOR_SETS: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        input(F::structure(
            "pAllocateInfo",
            &DESCRIPTOR_SET_ALLOCATE_INFO,
        )),
        ParamSpec::output(
            F::handle("pDescriptorSets", H::DescriptorSet)
                .counted_by("pAllocateInfo.descriptorSetCount"),
        )
        .creates(),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::AllocateDescriptorSets, RESULT)
};

static UPDATE_DESCRIPTOR_SETS: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        count("descriptorWriteCount"),
        input(
            F::structure("pDescriptorWrites", &WRITE_DESCRIPTOR_SET)
                .counted_by("descriptorWriteCount"),
        ),
        count("descriptorCopyCount"),
        input(
            F::structure("pDescriptorCopies", &COPY_DESCRIPTOR_SET)
                .counted_by("descriptorCopyCount"),
        ),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::UpdateDescriptorSets, VOID)
};

static CREATE_FRAMEBUFFER: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        create_info!(FRAMEBUFFER_CREATE_INFO),
        allocator!(),
        created("pFramebuffer", H::Framebuffer),
    ],
    ..CallDescriptor::new(Opcode::CreateFramebuffer, RESULT)
};

static DESTROY_FRAMEBUFFER: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        destroyed("framebuffer", H::Framebuffer),
        allocator!(),
    ],
    ..CallDescriptor::new(Opcode::DestroyFramebuffer, VOID)
};

static CREATE_RENDER_PASS: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        create_info!(RENDER_PASS_CREATE_INFO),
        allocator!(),
        created("pRenderPass", H::RenderPass),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::CreateRenderPass, RESULT)
};

static DESTROY_RENDER_PASS: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        destroyed("renderPass", H::RenderPass),
        allocator!(),
    ],
    ..CallDescriptor::new(Opcode::DestroyRenderPass, VOID)
};

static CREATE_COMMAND_POOL: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        create_info!(COMMAND_POOL_CREATE_INFO),
        allocator!(),
        created("pCommandPool", H::CommandPool),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::CreateCommandPool, RESULT)
};

static DESTROY_COMMAND_POOL: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        destroyed("commandPool", H::CommandPool),
        allocator!(),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::DestroyCommandPool, VOID)
};

static ALLOCATE_COMMAND_BUFFERS: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        input(F::structure(
            "pAllocateInfo",
            &COMMAND_BUFFER_ALLOCATE_INFO,
        )),
        ParamSpec::output(
            F::handle("pCommandBuffers", H::CommandBuffer)
                .counted_by("pAllocateInfo.commandBufferCount"),
        )
        .creates(),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::AllocateCommandBuffers, RESULT)
};

static FREE_COMMAND_BUFFERS: CallDescriptor = CallDescriptor {
    params: &[
        handle("device", H::Device),
        handle("commandPool", H::CommandPool),
        count("commandBufferCount"),
        ParamSpec::input(
            F::handle("pCommandBuffers", H::CommandBuffer)
                .optional()
                .counted_by("commandBufferCount"),
        )
        .destroys(),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::FreeCommandBuffers, VOID)
};

static BEGIN_COMMAND_BUFFER: CallDescriptor = CallDescriptor {
    params: &[
        handle("commandBuffer", H::CommandBuffer),
        input(F::structure("pBeginInfo", &COMMAND_BUFFER_BEGIN_INFO)),
    ],
    route: GLOBAL,
    ..CallDescriptor::new(Opcode::BeginCommandBuffer, RESULT)
};

static END_COMMAND_BUFFER: CallDescriptor = CallDescriptor {
    params: &[
        handle("commandBuffer", H::CommandBuffer),
    ],
    ..CallDescriptor::new(Opcode::EndCommandBuffer, RESULT)
};

static CMD_BIND_PIPELINE: CallDescriptor = CallDescriptor {
    params: &[
        handle("commandBuffer", H::CommandBuffer),
        input(F::enumeration("pipelineBindPoint", &PIPELINE_BIND_POINT)),
        handle("pipeline", H::Pipeline),
    ],
    route: GLOBAL,
    flags: CMD,
    ..CallDescriptor::new(Opcode::CmdBindPipeline, VOID)
};

static CMD_SET_VIEWPORT: CallDescriptor = CallDescriptor {
    params: &[
        handle("commandBuffer", H::CommandBuffer),
        count("firstViewport"),
        count("viewportCount"),
        input(F::structure("pViewports", &VIEWPORT).counted_by("viewportCount")),
    ],
    flags: CMD,
    ..CallDescriptor::new(Opcode::CmdSetViewport, VOID)
};

static CMD_SET_SCISSOR: CallDescriptor = CallDescriptor {
    params: &[
        handle("commandBuffer", H::CommandBuffer),
        count("firstScissor"),
        count("scissorCount"),
        input(F::structure("pScissors", &RECT_2D).counted_by("scissorCount")),
    ],
    flags: CMD,
    ..CallDescriptor::new(Opcode::CmdSetScissor, VOID)
};

static CMD_BIND_DESCRIPTOR_SETS: CallDescriptor = CallDescriptor {
    params: &[
        handle("commandBuffer", H::CommandBuffer),
        input(F::enumeration("pipelineBindPoint", &PIPELINE_BIND_POINT)),
        handle("layout", H::PipelineLayout),
        count("firstSet"),
        count("descriptorSetCount"),
        input(F::handle("pDescriptorSets", H::DescriptorSet).counted_by("descriptorSetCount")),
        count("dynamicOffsetCount"),
        input(F::u32("pDynamicOffsets").counted_by("dynamicOffsetCount")),
    ],
    route: GLOBAL,
    flags: CMD,
    ..CallDescriptor::new(Opcode::CmdBindDescriptorSets, VOID)
};

static CMD_BIND_INDEX_BUFFER: CallDescriptor = CallDescriptor {
    params: &[
        handle("commandBuffer", H::CommandBuffer),
        handle("buffer", H::Buffer),
        input(F::u64("offset")),
        input(F::enumeration("indexType", &INDEX_TYPE)),
    ],
    flags: CMD,
    ..CallDescriptor::new(Opcode::CmdBindIndexBuffer, VOID)
};

static CMD_BIND_VERTEX_BUFFERS: CallDescriptor = CallDescriptor {
    params: &[
        handle("commandBuffer", H::CommandBuffer),
        count("firstBinding"),
        count("bindingCount"),
        input(F::handle("pBuffers", H::Buffer).counted_by("bindingCount")),
        input(F::u64("pOffsets").counted_by("bindingCount")),
    ],
    flags: CMD,
    ..CallDescriptor::new(Opcode::CmdBindVertexBuffers, VOID)
};

static CMD_DRAW: CallDescriptor = CallDescriptor {
    params: &[
        handle("commandBuffer", H::CommandBuffer),
        count("vertexCount"),
        count("instanceCount"),
        count("firstVertex"),
        count("firstInstance"),
    ],
    flags: CMD,
    ..CallDescriptor::new(Opcode::CmdDraw, VOID)
};

static CMD_DRAW_INDEXED: CallDescriptor = CallDescriptor {
    params: &[
        handle("commandBuffer", H::CommandBuffer),
        count("indexCount"),
        count("instanceCount"),
        count("firstIndex"),
        input(F::int("vertexOffset", IntSpec::I32)),
        count("firstInstance"),
    ],
    flags: CMD,
    ..CallDescriptor::new(Opcode::CmdDrawIndexed, VOID)
};

static CMD_COPY_BUFFER_TO_IMAGE: CallDescriptor = CallDescriptor {
    params: &[
        handle("commandBuffer", H::CommandBuffer),
        handle("srcBuffer", H::Buffer),
        handle("dstImage", H::Image),
        input(F::enumeration("dstImageLayout", &IMAGE_LAYOUT)),
        count("regionCount"),
        input(F::structure("pRegions", &BUFFER_IMAGE_COPY).counted_by("regionCount")),
    ],
    route: GLOBAL,
    flags: CMD,
    ..CallDescriptor::new(Opcode::CmdCopyBufferToImage, VOID)
};

static CMD_COPY_IMAGE_TO_BUFFER: CallDescriptor = CallDescriptor {
    params: &[
        handle("commandBuffer", H::CommandBuffer),
        handle("srcImage", H::Image),
        input(F::enumeration("srcImageLayout", &IMAGE_LAYOUT)),
        handle("dstBuffer", H::Buffer),
        count("regionCount"),
        input(F::structure("pRegions", &BUFFER_IMAGE_COPY).counted_by("regionCount")),
    ],
    route: GLOBAL,
    flags: CMD,
    ..CallDescriptor::new(Opcode::CmdCopyImageToBuffer, VOID)
};

static CMD_CLEAR_COLOR_IMAGE: CallDescriptor = CallDescriptor {
    params: &[
        handle("commandBuffer", H::CommandBuffer),
        handle("image", H::Image),
        input(F::enumeration("imageLayout", &IMAGE_LAYOUT)),
        input(F::structure("pColor", &CLEAR_COLOR_VALUE)),
        count("rangeCount"),
        input(F::structure("pRanges", &IMAGE_SUBRESOURCE_RANGE).counted_by("rangeCount")),
    ],
    flags: CMD,
    ..CallDescriptor::new(Opcode::CmdClearColorImage, VOID)
};

static CMD_CLEAR_ATTACHMENTS: CallDescriptor = CallDescriptor {
    params: &[
        handle("commandBuffer", H::CommandBuffer),
        count("attachmentCount"),
        input(F::structure("pAttachments", &CLEAR_ATTACHMENT).counted_by("attachmentCount")),
        count("rectCount"),
        input(F::structure("pRects", &CLEAR_RECT).counted_by("rectCount")),
    ],
    flags: CMD,
    ..CallDescriptor::new(Opcode::CmdClearAttachments, VOID)
};

static CMD_PIPELINE_BARRIER: CallDescriptor = CallDescriptor {
    params: &[
        handle("commandBuffer", H::CommandBuffer),
        input(F::flags("srcStageMask", &PIPELINE_STAGE)),
        input(F::flags("dstStageMask", &PIPELINE_STAGE)),
        input(F::flags("dependencyFlags", &DEPENDENCY)),
        count("memoryBarrierCount"),
        input(F::structure("pMemoryBarriers", &MEMORY_BARRIER).counted_by("memoryBarrierCount")),
        count("bufferMemoryBarrierCount"),
        input(
            F::structure("pBufferMemoryBarriers", &BUFFER_MEMORY_BARRIER)
                .counted_by("bufferMemoryBarrierCount"),
        ),
        count("imageMemoryBarrierCount"),
        input(
            F::structure("pImageMemoryBarriers", &IMAGE_MEMORY_BARRIER)
                .counted_by("imageMemoryBarrierCount"),
        ),
    ],
    route: GLOBAL,
    flags: CMD,
    ..CallDescriptor::new(Opcode::CmdPipelineBarrier, VOID)
};

static CMD_BEGIN_RENDER_PASS: CallDescriptor = CallDescriptor {
    params: &[
        handle("commandBuffer", H::CommandBuffer),
        input(F::structure("pRenderPassBegin", &RENDER_PASS_BEGIN_INFO)),
        input(F::enumeration("contents", &SUBPASS_CONTENTS)),
    ],
    flags: CMD,
    ..CallDescriptor::new(Opcode::CmdBeginRenderPass, VOID)
};

static CMD_END_RENDER_PASS: CallDescriptor = CallDescriptor {
    params: &[
        handle("commandBuffer", H::CommandBuffer),
    ],
    flags: CMD,
    ..CallDescriptor::new(Opcode::CmdEndRenderPass, VOID)
};
