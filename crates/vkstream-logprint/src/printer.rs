//! Human-readable rendering of captured calls.
//!
//! The printer mirrors the wire codec but never maps handles: every value is printed exactly as
//! it was captured. Output is written as it is decoded, so a failing command still shows the
//! fields that came before the failure.

use std::fmt;

use thiserror::Error;
use vkstream_protocol::names::STRUCTURE_TYPE;
use vkstream_protocol::{
    codec, descriptor_for, CallDescriptor, EnumTable, FieldSpec, FieldType, FlagTable, IntSpec,
    Opcode, Record, StringEncoding, StructSchema, Value, WireError, WireReader, HEADER_SIZE,
};

const RAW_BYTES_PER_LINE: usize = 16;
const RAW_INDENT: usize = 8;
/// Indent level of the parameters of a printed command.
const PARAM_INDENT: usize = 4;

#[derive(Debug, Error)]
pub enum PrintError {
    #[error(transparent)]
    Wire(#[from] WireError),

    #[error("Not all data was decoded. Decoded {decoded} bytes but command had {total}")]
    TrailingBytes { decoded: usize, total: usize },

    #[error("Wrong structure type. Expected: {expected}, got {found} ({found_label}) instead")]
    StructureType {
        expected: String,
        found: u32,
        found_label: String,
    },

    #[error("Decoding structs with extensions is not supported")]
    UnsupportedExtension,

    #[error("failed to write output")]
    Output(#[from] fmt::Error),
}

/// Prints one captured command.
pub struct CommandPrinter<'d, 'o> {
    opcode: u32,
    original_size: u32,
    data: &'d [u8],
    r: WireReader<'d>,
    stream_idx: usize,
    cmd_idx: usize,
    out: &'o mut dyn fmt::Write,
}

impl<'d, 'o> CommandPrinter<'d, 'o> {
    /// `original_size` is the packet size before capture truncation, header included.
    pub fn new(
        opcode: u32,
        original_size: u32,
        data: &'d [u8],
        stream_idx: usize,
        cmd_idx: usize,
        out: &'o mut dyn fmt::Write,
    ) -> Self {
        Self {
            opcode,
            original_size,
            data,
            r: WireReader::new(data),
            stream_idx,
            cmd_idx,
            out,
        }
    }

    /// `OP_vkXxx` for known opcodes, the decimal opcode otherwise.
    pub fn cmd_name(&self) -> String {
        match Opcode::from_u32(self.opcode) {
            Some(op) => format!("OP_{}", op.name()),
            None => self.opcode.to_string(),
        }
    }

    /// Decodes and prints the whole command, falling back to a hex dump for unknown opcodes.
    ///
    /// On failure the error and a hex dump are printed after whatever was decoded, and the error
    /// is returned.
    pub fn print_cmd(&mut self) -> Result<(), PrintError> {
        self.r = WireReader::new(self.data);
        let name = self.cmd_name();
        writeln!(
            self.out,
            "\n{}.{} - {}: ({} bytes)",
            self.stream_idx,
            self.cmd_idx,
            name,
            i64::from(self.original_size) - HEADER_SIZE as i64
        )?;

        if self.data.is_empty() {
            return Ok(());
        }

        let Some(desc) = descriptor_for(self.opcode) else {
            self.print_raw()?;
            return Ok(());
        };

        let result = self
            .print_params(desc, PARAM_INDENT)
            .and_then(|_| self.check_no_more_bytes());
        if let Err(err) = result {
            writeln!(self.out, "Error while processing {name}: {err}")?;
            writeln!(self.out, "Command raw data:")?;
            self.print_raw()?;
            return Err(err);
        }
        Ok(())
    }

    /// Prints a call in capture layout and returns the values it read.
    pub fn print_params(
        &mut self,
        desc: &CallDescriptor,
        indent: usize,
    ) -> Result<Record, PrintError> {
        if !desc.is_command_buffer_scoped() {
            self.write_int("seqno", IntSpec::U32, indent)?;
        }
        let mut scope = Record::new();
        for param in desc.capture_params() {
            let value = self.print_field(&param.field, &scope, indent)?;
            scope.push(param.name(), value);
        }
        Ok(scope)
    }

    pub fn check_no_more_bytes(&self) -> Result<(), PrintError> {
        if self.r.is_empty() {
            return Ok(());
        }
        Err(PrintError::TrailingBytes {
            decoded: self.r.position(),
            total: self.data.len(),
        })
    }

    /// Hex dump of the whole payload, marked with `[...]` when the capture truncated it.
    pub fn print_raw(&mut self) -> fmt::Result {
        let truncated = u64::from(self.original_size) > (self.data.len() + HEADER_SIZE) as u64;
        for line in raw_lines(self.data, truncated) {
            writeln!(self.out, "{:width$}{line}", "", width = RAW_INDENT)?;
        }
        Ok(())
    }

    /// Prints one field. Counts are resolved against `scope`, the values printed before it.
    pub fn print_field(
        &mut self,
        spec: &FieldSpec,
        scope: &Record,
        indent: usize,
    ) -> Result<Value, PrintError> {
        let count = codec::element_count(spec, scope)?;
        if spec.optional && self.check_null(spec.name, indent)? {
            return Ok(Value::Absent);
        }

        match (spec.ty, count) {
            (FieldType::Int(int), None) => self.write_int(spec.name, int, indent),
            (FieldType::Int(int), Some(n)) => self.write_ints(spec.name, int, n, indent),
            (FieldType::Handle(_), None) => self.write_int(spec.name, IntSpec::U64, indent),
            (FieldType::Handle(_), Some(n)) => self.write_ints(spec.name, IntSpec::U64, n, indent),
            (FieldType::Float32, count) => self.write_float(spec.name, count, indent),
            (FieldType::Enum(table), None) => {
                Ok(Value::Enum(self.write_enum(spec.name, table, indent)?))
            }
            (FieldType::Enum(table), Some(n)) => {
                let values = self.r.read_array(n, |r| r.read_u32())?;
                let list = join(values.iter().map(|&v| enum_text(table, v)));
                self.write(indent, format_args!("{}: [{list}]\n", spec.name))?;
                Ok(Value::Array(values.into_iter().map(Value::Enum).collect()))
            }
            (FieldType::Flags(table), None) => {
                Ok(Value::Flags(self.write_flags(spec.name, table, indent)?))
            }
            (FieldType::Flags(table), Some(n)) => {
                let values = self.r.read_array(n, |r| r.read_u32())?;
                let list = join(values.iter().map(|&v| flags_text(table, v)));
                self.write(indent, format_args!("{}: [{list}]\n", spec.name))?;
                Ok(Value::Array(values.into_iter().map(Value::Flags).collect()))
            }
            (FieldType::Str(encoding), None) => {
                Ok(Value::Str(self.write_string(spec.name, encoding, indent)?))
            }
            (FieldType::Str(encoding), Some(n)) => {
                let name = spec.name;
                let values = self.r.read_array(n, |r| r.read_string(encoding, name))?;
                let list = join(values.iter().map(|s| format!("\"{s}\"")));
                self.write(indent, format_args!("{name}: [{list}]\n"))?;
                Ok(Value::Array(values.into_iter().map(Value::Str).collect()))
            }
            (FieldType::Struct(schema), count) => {
                self.write_struct(spec.name, schema, false, count, indent)
            }
        }
    }

    /// Small values print in decimal, everything else as hex followed by decimal.
    pub fn write_int(
        &mut self,
        name: &str,
        spec: IntSpec,
        indent: usize,
    ) -> Result<Value, PrintError> {
        let (value, wide) = if spec.signed {
            let v = self.r.read_sint(spec)?;
            (Value::SInt(v), i128::from(v))
        } else {
            let v = self.r.read_uint(spec)?;
            (Value::UInt(v), i128::from(v))
        };
        if wide < 10 {
            self.write(indent, format_args!("{name}: {wide}\n"))?;
        } else {
            self.write(indent, format_args!("{name}: {wide:#x} ({wide})\n"))?;
        }
        Ok(value)
    }

    /// Repeated integers always print as hex.
    pub fn write_ints(
        &mut self,
        name: &str,
        spec: IntSpec,
        count: usize,
        indent: usize,
    ) -> Result<Value, PrintError> {
        let (list, values): (String, Vec<Value>) = if spec.signed {
            let values = self.r.read_array(count, |r| r.read_sint(spec))?;
            let list = join(values.iter().map(|&v| signed_hex(v)));
            (list, values.into_iter().map(Value::SInt).collect())
        } else {
            let values = self.r.read_array(count, |r| r.read_uint(spec))?;
            let list = join(values.iter().map(|v| format!("{v:#x}")));
            (list, values.into_iter().map(Value::UInt).collect())
        };
        self.write(indent, format_args!("{name}: [{list}]\n"))?;
        Ok(Value::Array(values))
    }

    pub fn write_float(
        &mut self,
        name: &str,
        count: Option<usize>,
        indent: usize,
    ) -> Result<Value, PrintError> {
        match count {
            None => {
                let v = self.r.read_f32()?;
                self.write(indent, format_args!("{name}: {v:?}\n"))?;
                Ok(Value::Float(v))
            }
            Some(n) => {
                let values = self.r.read_array(n, |r| r.read_f32())?;
                let list = join(values.iter().map(|v| format!("{v:?}")));
                self.write(indent, format_args!("{name}: [{list}]\n"))?;
                Ok(Value::Array(values.into_iter().map(Value::Float).collect()))
            }
        }
    }

    pub fn write_enum(
        &mut self,
        name: &str,
        table: &EnumTable,
        indent: usize,
    ) -> Result<u32, PrintError> {
        let value = self.r.read_u32()?;
        self.write(indent, format_args!("{name}: {}\n", enum_text(table, value)))?;
        Ok(value)
    }

    pub fn write_flags(
        &mut self,
        name: &str,
        table: &FlagTable,
        indent: usize,
    ) -> Result<u32, PrintError> {
        let value = self.r.read_u32()?;
        self.write(indent, format_args!("{name}: {}\n", flags_text(table, value)))?;
        Ok(value)
    }

    /// Prints and checks the `sType` tag and extension-chain length of an extensible structure.
    pub fn write_stype_and_pnext(
        &mut self,
        schema: &StructSchema,
        indent: usize,
    ) -> Result<(), PrintError> {
        let Some(expected) = schema.s_type else {
            return Ok(());
        };
        let found = self.write_enum("sType", &STRUCTURE_TYPE, indent)?;
        if found != expected {
            return Err(PrintError::StructureType {
                expected: STRUCTURE_TYPE
                    .label(expected)
                    .map_or_else(|| expected.to_string(), str::to_owned),
                found,
                found_label: STRUCTURE_TYPE.label(found).unwrap_or("unknown").to_owned(),
            });
        }

        let pnext_size = self.write_int("pNext_size", IntSpec::U32.big_endian(), indent)?;
        if pnext_size != Value::UInt(0) {
            self.write_enum("ext type", &STRUCTURE_TYPE, indent + 1)?;
            return Err(PrintError::UnsupportedExtension);
        }
        Ok(())
    }

    /// Reads the null sentinel of an optional field. Prints `(null)` and returns `true` when the
    /// field is absent.
    pub fn check_null(&mut self, name: &str, indent: usize) -> Result<bool, PrintError> {
        let present = self.r.read_sentinel()?;
        if !present {
            self.write(indent, format_args!("{name}: (null)\n"))?;
        }
        Ok(!present)
    }

    /// Prints a structure, or `count` of them with a ` #i` suffix each.
    pub fn write_struct(
        &mut self,
        name: &str,
        schema: &StructSchema,
        optional: bool,
        count: Option<usize>,
        indent: usize,
    ) -> Result<Value, PrintError> {
        if optional && self.check_null(name, indent)? {
            return Ok(Value::Absent);
        }
        let Some(count) = count else {
            self.write(indent, format_args!("{name}:\n"))?;
            return Ok(Value::Struct(self.print_struct_body(schema, indent + 1)?));
        };
        let mut items = Vec::new();
        for i in 0..count {
            self.write(indent, format_args!("{name} #{i}:\n"))?;
            items.push(Value::Struct(self.print_struct_body(schema, indent + 1)?));
        }
        Ok(Value::Array(items))
    }

    fn print_struct_body(
        &mut self,
        schema: &StructSchema,
        indent: usize,
    ) -> Result<Record, PrintError> {
        self.write_stype_and_pnext(schema, indent)?;
        let mut scope = Record::new();
        for spec in schema.fields {
            let value = self.print_field(spec, &scope, indent)?;
            scope.push(spec.name, value);
        }
        Ok(scope)
    }

    pub fn write_string(
        &mut self,
        name: &'static str,
        encoding: StringEncoding,
        indent: usize,
    ) -> Result<String, PrintError> {
        let value = self.r.read_string(encoding, name)?;
        self.write(indent, format_args!("{name}: \"{value}\"\n"))?;
        Ok(value)
    }

    fn write(&mut self, indent: usize, args: fmt::Arguments<'_>) -> fmt::Result {
        write!(self.out, "{:width$}", "", width = indent * 2)?;
        self.out.write_fmt(args)
    }
}

fn join(parts: impl Iterator<Item = String>) -> String {
    parts.collect::<Vec<_>>().join(", ")
}

/// Negative values keep their sign after the prefix: `-5` prints as `0x-5`.
fn signed_hex(value: i64) -> String {
    if value < 0 {
        format!("0x-{:x}", value.unsigned_abs())
    } else {
        format!("{value:#x}")
    }
}

fn enum_text(table: &EnumTable, value: u32) -> String {
    format!("{} ({value})", table.label(value).unwrap_or(""))
}

fn flags_text(table: &FlagTable, value: u32) -> String {
    let parts = if value == u32::MAX {
        vec!["(all flags)".to_owned()]
    } else {
        let (names, rest) = table.split(value);
        let mut parts = Vec::with_capacity(names.len() + 1);
        if rest != 0 {
            parts.push(format!("{rest:#x}"));
        }
        parts.extend(names.into_iter().map(str::to_owned));
        parts
    };
    format!("{} ({value:#x})", parts.join(" | "))
}

/// Space-separated hex bytes wrapped at 16 per line.
fn raw_lines(data: &[u8], truncated: bool) -> Vec<String> {
    let width = RAW_BYTES_PER_LINE * 3;
    let tokens = data
        .iter()
        .map(|b| format!("{b:02x}"))
        .chain(truncated.then(|| "[...]".to_owned()));

    let mut lines = Vec::new();
    let mut line = String::new();
    for token in tokens {
        if !line.is_empty() && line.len() + 1 + token.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&token);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vkstream_protocol::WireWriter;

    static FOO_ENUM: EnumTable = EnumTable::new("Foo", &[(1000156007, "FOOBAR")]);
    static EMPTY_ENUM: EnumTable = EnumTable::new("Empty", &[]);
    static FOO_FLAGS: FlagTable = FlagTable::new("Foo", &[(1, "FOO"), (2, "BAR"), (4, "BAZ")]);

    static POINT: StructSchema = StructSchema {
        name: "Point",
        s_type: None,
        fields: &[FieldSpec::u32("x"), FieldSpec::u32("y")],
    };

    fn hex(s: &str) -> Vec<u8> {
        s.split_whitespace()
            .map(|b| u8::from_str_radix(b, 16).unwrap())
            .collect()
    }

    /// Runs `f` over a printer for `data` and returns the text plus the final
    /// `check_no_more_bytes` result.
    fn run<T>(
        data: &[u8],
        f: impl FnOnce(&mut CommandPrinter<'_, '_>) -> Result<T, PrintError>,
    ) -> (String, T) {
        let mut out = String::new();
        let mut printer = CommandPrinter::new(0, data.len() as u32, data, 0, 0, &mut out);
        let value = f(&mut printer).unwrap();
        printer.check_no_more_bytes().unwrap();
        (out, value)
    }

    fn print(opcode: Opcode, data: &[u8], stream_idx: usize, cmd_idx: usize) -> (String, Result<(), PrintError>) {
        let mut out = String::new();
        let result = CommandPrinter::new(
            opcode.as_u32(),
            (data.len() + HEADER_SIZE) as u32,
            data,
            stream_idx,
            cmd_idx,
            &mut out,
        )
        .print_cmd();
        (out, result)
    }

    #[test]
    fn leftover_bytes_are_reported() {
        let data = hex("01 02 03 04 05");
        let mut out = String::new();
        let mut printer = CommandPrinter::new(0, 5, &data, 0, 0, &mut out);
        printer.write_int("foobar", IntSpec::U32, 0).unwrap();
        let err = printer.check_no_more_bytes().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Not all data was decoded. Decoded 4 bytes but command had 5"
        );
    }

    #[test]
    fn small_ints_print_in_decimal() {
        let (out, value) = run(&hex("02 00 00 00"), |p| p.write_int("foobar", IntSpec::U32, 0));
        assert_eq!(out, "foobar: 2\n");
        assert_eq!(value, Value::UInt(2));
    }

    #[test]
    fn larger_ints_print_hex_and_decimal() {
        let (out, _) = run(&hex("2a 00 00 00"), |p| p.write_int("n", IntSpec::U32, 1));
        assert_eq!(out, "  n: 0x2a (42)\n");

        let (out, value) = run(&hex("fd ff ff ff"), |p| p.write_int("n", IntSpec::I32, 0));
        assert_eq!(out, "n: -3\n");
        assert_eq!(value, Value::SInt(-3));
    }

    #[test]
    fn optional_int_present() {
        let spec = FieldSpec::int("i", IntSpec::U8).optional();
        let (out, value) = run(&hex("00 00 00 00 00 00 00 01 08"), |p| {
            p.print_field(&spec, &Record::new(), 0)
        });
        assert_eq!(out, "i: 8\n");
        assert_eq!(value, Value::UInt(8));
    }

    #[test]
    fn optional_int_missing() {
        let spec = FieldSpec::int("i", IntSpec::U8).optional();
        let (out, value) = run(&hex("00 00 00 00 00 00 00 00"), |p| {
            p.print_field(&spec, &Record::new(), 0)
        });
        assert_eq!(out, "i: (null)\n");
        assert_eq!(value, Value::Absent);
    }

    #[test]
    fn optional_repeated_int() {
        let spec = FieldSpec::int("i", IntSpec::U16).optional().counted_by("n");
        let scope = Record::new().with("n", Value::UInt(2));
        let (out, _) = run(&hex("00 00 00 00 00 00 00 01 02 00 03 00"), |p| {
            p.print_field(&spec, &scope, 0)
        });
        assert_eq!(out, "i: [0x2, 0x3]\n");
    }

    #[test]
    fn repeated_signed_ints_keep_their_sign() {
        let (out, value) = run(&hex("fb ff ff ff 10 00 00 00"), |p| {
            p.write_ints("offsets", IntSpec::I32, 2, 0)
        });
        assert_eq!(out, "offsets: [0x-5, 0x10]\n");
        assert_eq!(
            value,
            Value::Array(vec![Value::SInt(-5), Value::SInt(16)])
        );
    }

    #[test]
    fn floats() {
        let (out, _) = run(&hex("00 00 00 3f"), |p| p.write_float("foo", None, 0));
        assert_eq!(out, "foo: 0.5\n");

        let (out, _) = run(&hex("00 00 00 3f 00 00 80 3f"), |p| {
            p.write_float("foo", Some(2), 0)
        });
        assert_eq!(out, "foo: [0.5, 1.0]\n");
    }

    #[test]
    fn strings() {
        let (out, _) = run(&hex("77 6f 72 6c 64 00"), |p| {
            p.write_string("hello", StringEncoding::NulTerminated, 1)
        });
        assert_eq!(out, "  hello: \"world\"\n");

        let (out, value) = run(&hex("77 6f 72 6c 64 00 00 00"), |p| {
            p.write_string("hello", StringEncoding::Fixed(8), 1)
        });
        assert_eq!(out, "  hello: \"world\"\n");
        assert_eq!(value, "world");
    }

    #[test]
    fn enums() {
        let (out, value) = run(&hex("67 2B 9D 3B"), |p| p.write_enum("foo", &FOO_ENUM, 0));
        assert_eq!(out, "foo: FOOBAR (1000156007)\n");
        assert_eq!(value, 1000156007);

        let (out, _) = run(&hex("67 2B 9D 3B"), |p| p.write_enum("foo", &EMPTY_ENUM, 0));
        assert_eq!(out, "foo:  (1000156007)\n");
    }

    #[test]
    fn flags() {
        let (out, _) = run(&hex("03 00 00 00"), |p| p.write_flags("foo", &FOO_FLAGS, 0));
        assert_eq!(out, "foo: FOO | BAR (0x3)\n");

        let (out, _) = run(&hex("0A 00 00 00"), |p| p.write_flags("foo", &FOO_FLAGS, 0));
        assert_eq!(out, "foo: 0x8 | BAR (0xa)\n");

        let (out, _) = run(&hex("ff ff ff ff"), |p| p.write_flags("foo", &FOO_FLAGS, 0));
        assert_eq!(out, "foo: (all flags) (0xffffffff)\n");
    }

    #[test]
    fn repeated_structs_are_numbered() {
        let (out, value) = run(&hex("01 00 00 00 02 00 00 00 03 00 00 00 0c 00 00 00"), |p| {
            p.write_struct("pPoints", &POINT, false, Some(2), 1)
        });
        assert_eq!(
            out,
            "  pPoints #0:\n    x: 1\n    y: 2\n  pPoints #1:\n    x: 3\n    y: 0xc (12)\n"
        );
        assert_eq!(value.as_array().map(<[Value]>::len), Some(2));
    }

    fn destroy_instance_payload(seqno: u32, instance: u64) -> Vec<u8> {
        let mut w = WireWriter::new();
        w.write_u32(seqno);
        w.write_u64(instance);
        w.write_sentinel(false);
        w.into_inner()
    }

    #[test]
    fn prints_call_with_seqno() {
        let data = destroy_instance_payload(20, 0x1234);
        let (out, result) = print(Opcode::DestroyInstance, &data, 0, 1);
        result.unwrap();
        assert_eq!(
            out,
            "\n0.1 - OP_vkDestroyInstance: (20 bytes)\n\
             \x20       seqno: 0x14 (20)\n\
             \x20       instance: 0x1234 (4660)\n\
             \x20       pAllocator: (null)\n"
        );
    }

    #[test]
    fn command_buffer_calls_skip_seqno_and_command_buffer() {
        let mut w = WireWriter::new();
        w.write_u32(0);
        w.write_u64(0x77);
        let (out, result) = print(Opcode::CmdBindPipeline, w.as_bytes(), 2, 0);
        result.unwrap();
        assert_eq!(
            out,
            "\n2.0 - OP_vkCmdBindPipeline: (12 bytes)\n\
             \x20       pipelineBindPoint: VK_PIPELINE_BIND_POINT_GRAPHICS (0)\n\
             \x20       pipeline: 0x77 (119)\n"
        );
    }

    #[test]
    fn prints_nested_create_info() {
        let mut w = WireWriter::new();
        w.write_u32(3);
        w.write_u64(0x10);
        w.write_u32(8);
        w.write_uint(IntSpec::U32.big_endian(), 0);
        w.write_u32(1);
        w.write_sentinel(false);
        w.write_u64(0x22);
        let (out, result) = print(Opcode::CreateFence, w.as_bytes(), 0, 0);
        result.unwrap();
        assert_eq!(
            out,
            "\n0.0 - OP_vkCreateFence: (40 bytes)\n\
             \x20       seqno: 3\n\
             \x20       device: 0x10 (16)\n\
             \x20       pCreateInfo:\n\
             \x20         sType: VK_STRUCTURE_TYPE_FENCE_CREATE_INFO (8)\n\
             \x20         pNext_size: 0\n\
             \x20         flags: VK_FENCE_CREATE_SIGNALED_BIT (0x1)\n\
             \x20       pAllocator: (null)\n\
             \x20       pFence: 0x22 (34)\n"
        );
    }

    #[test]
    fn wrong_structure_type_keeps_partial_output() {
        let mut w = WireWriter::new();
        w.write_u32(3);
        w.write_u64(0x10);
        w.write_u32(9);
        let (out, result) = print(Opcode::CreateFence, w.as_bytes(), 0, 0);
        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Wrong structure type. Expected: VK_STRUCTURE_TYPE_FENCE_CREATE_INFO, got 9 \
             (VK_STRUCTURE_TYPE_SEMAPHORE_CREATE_INFO) instead"
        );
        assert!(out.contains("        pCreateInfo:\n          sType: VK_STRUCTURE_TYPE_SEMAPHORE_CREATE_INFO (9)\n"));
        assert!(out.contains("Error while processing OP_vkCreateFence: Wrong structure type."));
    }

    #[test]
    fn extension_chains_are_not_decoded() {
        let mut w = WireWriter::new();
        w.write_u32(3);
        w.write_u64(0x10);
        w.write_u32(8);
        w.write_uint(IntSpec::U32.big_endian(), 16);
        w.write_u32(1000059001);
        let (out, result) = print(Opcode::CreateFence, w.as_bytes(), 0, 0);
        assert!(matches!(result, Err(PrintError::UnsupportedExtension)));
        assert!(out.contains("          pNext_size: 0x10 (16)\n            ext type:"));
    }

    #[test]
    fn trailing_bytes_print_error_and_raw_dump() {
        let mut data = destroy_instance_payload(1, 2);
        data.push(0xee);
        let (out, result) = print(Opcode::DestroyInstance, &data, 0, 0);
        assert!(matches!(
            result,
            Err(PrintError::TrailingBytes {
                decoded: 20,
                total: 21
            })
        ));
        assert_eq!(
            out,
            "\n0.0 - OP_vkDestroyInstance: (21 bytes)\n\
             \x20       seqno: 1\n\
             \x20       instance: 2\n\
             \x20       pAllocator: (null)\n\
             Error while processing OP_vkDestroyInstance: Not all data was decoded. Decoded 20 bytes but command had 21\n\
             Command raw data:\n\
             \x20       01 00 00 00 02 00 00 00 00 00 00 00 00 00 00 00\n\
             \x20       00 00 00 00 ee\n"
        );
    }

    #[test]
    fn unknown_opcode_dumps_truncated_bytes() {
        let data: Vec<u8> = (0u8..20).collect();
        let mut out = String::new();
        CommandPrinter::new(7, 100, &data, 1, 3, &mut out)
            .print_cmd()
            .unwrap();
        assert_eq!(
            out,
            "\n1.3 - 7: (92 bytes)\n\
             \x20       00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f\n\
             \x20       10 11 12 13 [...]\n"
        );
    }

    #[test]
    fn truncation_marker_wraps_onto_its_own_line() {
        let lines = raw_lines(&[0xab; 16], true);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "[...]");
        assert_eq!(raw_lines(&[0xab; 14], true).len(), 1);
    }

    #[test]
    fn empty_payload_prints_only_the_title() {
        let (out, result) = print(Opcode::QueueWaitIdle, &[], 0, 0);
        result.unwrap();
        assert_eq!(out, "\n0.0 - OP_vkQueueWaitIdle: (0 bytes)\n");
    }

    #[test]
    fn printing_is_repeatable() {
        let data = destroy_instance_payload(20, 0x1234);
        let mut out = String::new();
        let mut printer = CommandPrinter::new(
            Opcode::DestroyInstance.as_u32(),
            28,
            &data,
            0,
            0,
            &mut out,
        );
        printer.print_cmd().unwrap();
        printer.print_cmd().unwrap();
        let (first, second) = out.split_at(out.len() / 2);
        assert_eq!(first, second);
    }
}
