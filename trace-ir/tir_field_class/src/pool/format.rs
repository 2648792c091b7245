//! One-line field class rendering for logs and test assertions.
//!
//! ```text
//! struct { id: u64, len: u8, data: string[] }
//! variant<u8> { a [0, 3]: i32, b [4, 4]: f32 }
//! enum u8 { on: {[1, 1]}, off: {[0, 0]} }
//! ```

#![allow(clippy::format_push_string)] // debug output, clarity over allocation

use super::ensure_sufficient_stack;
use crate::container::NamedFieldClassContainer;
use crate::{DisplayBase, FieldClassId, FieldClassKind, Pool};

impl Pool {
    /// Render `id` and its subtree as a single line.
    pub fn format_field_class(&self, id: FieldClassId) -> String {
        let mut buf = String::new();
        self.format_field_class_into(id, &mut buf);
        buf
    }

    /// Render `id` into an existing buffer.
    pub fn format_field_class_into(&self, id: FieldClassId, buf: &mut String) {
        ensure_sufficient_stack(|| self.push_field_class(id, buf));
    }

    fn push_field_class(&self, id: FieldClassId, buf: &mut String) {
        let fc = self.get(id);
        match fc.kind() {
            FieldClassKind::UnsignedInteger(a) => {
                push_integer(buf, 'u', a.field_value_range, a.display_base);
            }
            FieldClassKind::SignedInteger(a) => {
                push_integer(buf, 'i', a.field_value_range, a.display_base);
            }
            FieldClassKind::UnsignedEnumeration(e) | FieldClassKind::SignedEnumeration(e) => {
                let sign = if fc.field_class_type().is_signed_integer() {
                    'i'
                } else {
                    'u'
                };
                buf.push_str("enum ");
                push_integer(buf, sign, e.int.field_value_range, e.int.display_base);
                buf.push_str(" {");
                for (i, mapping) in e.mappings.iter().enumerate() {
                    buf.push_str(if i == 0 { " " } else { ", " });
                    buf.push_str(mapping.label());
                    buf.push_str(": ");
                    buf.push_str(&self.any_range_set(mapping.ranges()).to_string());
                }
                buf.push_str(if e.mappings.is_empty() { "}" } else { " }" });
            }
            FieldClassKind::Real { single_precision } => {
                buf.push_str(if *single_precision { "f32" } else { "f64" });
            }
            FieldClassKind::String => buf.push_str("string"),
            FieldClassKind::Structure(members) => {
                buf.push_str("struct ");
                self.format_entries_into(members, buf);
            }
            FieldClassKind::VariantWithoutSelector(options) => {
                buf.push_str("variant ");
                self.format_entries_into(options, buf);
            }
            FieldClassKind::VariantWithUnsignedSelector(v)
            | FieldClassKind::VariantWithSignedSelector(v) => {
                buf.push_str("variant<");
                self.format_field_class_into(v.selector, buf);
                buf.push('>');
                if let Some(path) = &v.selector_path {
                    buf.push_str(" @ ");
                    buf.push_str(&path.to_string());
                }
                buf.push(' ');
                self.format_entries_into(&v.options, buf);
            }
            FieldClassKind::StaticArray { element, length } => {
                self.format_field_class_into(*element, buf);
                buf.push_str(&format!("[{length}]"));
            }
            FieldClassKind::DynamicArray {
                element,
                length_path,
                ..
            } => {
                self.format_field_class_into(*element, buf);
                buf.push('[');
                if let Some(path) = length_path {
                    buf.push_str(&path.to_string());
                }
                buf.push(']');
            }
        }
    }

    fn format_entries_into(&self, entries: &NamedFieldClassContainer, buf: &mut String) {
        if entries.is_empty() {
            buf.push_str("{}");
            return;
        }
        buf.push_str("{ ");
        for (i, entry) in entries.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            buf.push_str(entry.name());
            if let Some(ranges) = entry.ranges() {
                // Option ranges print without the set braces.
                let set = self.any_range_set(ranges).to_string();
                buf.push(' ');
                buf.push_str(set.trim_start_matches('{').trim_end_matches('}'));
            }
            buf.push_str(": ");
            self.format_field_class_into(entry.field_class(), buf);
        }
        buf.push_str(" }");
    }
}

fn push_integer(buf: &mut String, sign: char, bits: u64, base: DisplayBase) {
    buf.push(sign);
    buf.push_str(&bits.to_string());
    if base != DisplayBase::Decimal {
        buf.push(':');
        buf.push_str(&base.to_string());
    }
}
