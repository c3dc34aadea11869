//! Type-driven reading and writing of call parameters.
//!
//! The codec walks [`FieldSpec`]s: one routine serves every call and structure, so adding a call
//! is a table edit rather than new code.

use crate::error::{Result, WireError};
use crate::stream::{IntSpec, WireReader, WireWriter};
use crate::types::{
    Count, FieldSpec, FieldType, HandleMapper, HandleMapping, Record, StructSchema, Value,
};

/// Number of elements `spec` carries, or `None` for a scalar.
///
/// Field counts are looked up in `scope`, the values decoded before `spec` at the same level.
/// An absent count pointer counts as zero.
pub fn element_count(spec: &FieldSpec, scope: &Record) -> Result<Option<usize>> {
    match spec.count {
        Count::One => Ok(None),
        Count::Fixed(n) => Ok(Some(n)),
        Count::Field { name, divisor } => {
            let value = scope.lookup(name).ok_or(WireError::MissingCount {
                field: spec.name,
                count_field: name,
            })?;
            let raw = if value.is_absent() {
                0
            } else {
                value.as_u64().ok_or(WireError::MissingCount {
                    field: spec.name,
                    count_field: name,
                })?
            };
            let count = raw.div_ceil(divisor.max(1));
            usize::try_from(count)
                .map(Some)
                .map_err(|_| WireError::CountOverflow {
                    field: spec.name,
                    count,
                })
        }
    }
}

/// Reads one field (sentinel, count and all).
pub fn decode_field(
    r: &mut WireReader<'_>,
    spec: &FieldSpec,
    scope: &Record,
    mapper: &mut dyn HandleMapper,
    mapping: HandleMapping,
) -> Result<Value> {
    if spec.optional && !r.read_sentinel()? {
        return Ok(Value::Absent);
    }
    match element_count(spec, scope)? {
        None => decode_element(r, spec, mapper, mapping),
        Some(count) => {
            // Each element is at least one byte, so a count beyond the payload can never be
            // satisfied.
            if count > r.remaining() && element_has_size(spec) {
                return Err(WireError::UnexpectedEof {
                    offset: r.position(),
                    needed: count,
                    remaining: r.remaining(),
                });
            }
            let values = r.read_array(count, |r| decode_element(r, spec, mapper, mapping))?;
            Ok(Value::Array(values))
        }
    }
}

fn element_has_size(spec: &FieldSpec) -> bool {
    match spec.ty {
        FieldType::Struct(schema) => schema.s_type.is_some() || !schema.fields.is_empty(),
        _ => true,
    }
}

fn decode_element(
    r: &mut WireReader<'_>,
    spec: &FieldSpec,
    mapper: &mut dyn HandleMapper,
    mapping: HandleMapping,
) -> Result<Value> {
    Ok(match spec.ty {
        FieldType::Int(int) if int.signed => Value::SInt(r.read_sint(int)?),
        FieldType::Int(int) => Value::UInt(r.read_uint(int)?),
        FieldType::Float32 => Value::Float(r.read_f32()?),
        FieldType::Enum(table) => Value::Enum(r.read_enum(table)?.0),
        FieldType::Flags(_) => Value::Flags(r.read_u32()?),
        FieldType::Handle(ty) => {
            let handle = r.read_u64()?;
            let mapped =
                mapper
                    .map_read(ty, handle, mapping)
                    .map_err(|source| WireError::HandleMapping {
                        field: spec.name,
                        handle,
                        source,
                    })?;
            Value::Handle(mapped)
        }
        FieldType::Str(encoding) => Value::Str(r.read_string(encoding, spec.name)?),
        FieldType::Struct(schema) => Value::Struct(decode_struct(r, schema, mapper, mapping)?),
    })
}

/// Consumes the `sType` tag and extension-chain length of an extensible structure.
///
/// A mismatched tag fails after only the tag has been consumed.
pub fn read_struct_header(r: &mut WireReader<'_>, schema: &StructSchema) -> Result<()> {
    let Some(expected) = schema.s_type else {
        return Ok(());
    };
    let found = r.read_u32()?;
    if found != expected {
        return Err(WireError::StructureTypeMismatch {
            schema: schema.name,
            expected,
            found,
        });
    }
    let length = r.read_uint(IntSpec::U32.big_endian())?;
    if length != 0 {
        let ext_type = r.read_u32().ok();
        return Err(WireError::UnsupportedExtensionChain {
            schema: schema.name,
            length: length as u32,
            ext_type,
        });
    }
    Ok(())
}

pub fn decode_struct(
    r: &mut WireReader<'_>,
    schema: &StructSchema,
    mapper: &mut dyn HandleMapper,
    mapping: HandleMapping,
) -> Result<Record> {
    read_struct_header(r, schema)?;
    decode_fields(r, schema.fields, mapper, mapping)
}

/// Reads `fields` in order with a single mapping mode.
pub fn decode_fields(
    r: &mut WireReader<'_>,
    fields: &[FieldSpec],
    mapper: &mut dyn HandleMapper,
    mapping: HandleMapping,
) -> Result<Record> {
    let mut record = Record::new();
    for spec in fields {
        let value = decode_field(r, spec, &record, mapper, mapping)?;
        record.push(spec.name, value);
    }
    Ok(record)
}

/// Writes one field. Handles are written verbatim; callers box them beforehand.
///
/// `scope` is the record `value` belongs to and is used to check array lengths against their
/// count fields.
pub fn encode_field(
    w: &mut WireWriter,
    spec: &FieldSpec,
    value: &Value,
    scope: &Record,
) -> Result<()> {
    if spec.optional {
        if value.is_absent() {
            w.write_sentinel(false);
            return Ok(());
        }
        w.write_sentinel(true);
    } else if value.is_absent() {
        return Err(WireError::ValueMismatch { field: spec.name });
    }

    match element_count(spec, scope)? {
        None => encode_element(w, spec, value),
        Some(expected) => {
            let values = value
                .as_array()
                .ok_or(WireError::ValueMismatch { field: spec.name })?;
            if values.len() != expected {
                return Err(WireError::CountMismatch {
                    field: spec.name,
                    expected: expected as u64,
                    found: values.len(),
                });
            }
            values
                .iter()
                .try_for_each(|element| encode_element(w, spec, element))
        }
    }
}

fn encode_element(w: &mut WireWriter, spec: &FieldSpec, value: &Value) -> Result<()> {
    let mismatch = || WireError::ValueMismatch { field: spec.name };
    match (spec.ty, value) {
        (FieldType::Int(int), Value::UInt(v)) => w.write_uint(int, *v),
        (FieldType::Int(int), Value::SInt(v)) => w.write_sint(int, *v),
        (FieldType::Float32, Value::Float(v)) => w.write_f32(*v),
        (FieldType::Enum(_), Value::Enum(v)) | (FieldType::Flags(_), Value::Flags(v)) => {
            w.write_u32(*v)
        }
        (FieldType::Handle(_), Value::Handle(v)) => w.write_u64(*v),
        (FieldType::Str(encoding), Value::Str(s)) => w.write_string(encoding, s),
        (FieldType::Struct(schema), Value::Struct(record)) => encode_struct(w, schema, record)?,
        _ => return Err(mismatch()),
    }
    Ok(())
}

pub fn encode_struct(w: &mut WireWriter, schema: &StructSchema, record: &Record) -> Result<()> {
    if let Some(s_type) = schema.s_type {
        w.write_u32(s_type);
        w.write_uint(IntSpec::U32.big_endian(), 0);
    }
    encode_fields(w, schema.fields, record)
}

/// Writes every field of `record` that `fields` names, in `fields` order.
pub fn encode_fields(w: &mut WireWriter, fields: &[FieldSpec], record: &Record) -> Result<()> {
    for spec in fields {
        let value = record
            .get(spec.name)
            .ok_or(WireError::ValueMismatch { field: spec.name })?;
        encode_field(w, spec, value, record)?;
    }
    Ok(())
}
