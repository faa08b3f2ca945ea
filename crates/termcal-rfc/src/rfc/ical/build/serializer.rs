//! iCalendar serializer (RFC 5545).
//!
//! Output is deterministic: properties follow a canonical order per
//! component kind, VTIMEZONE components come first and events are sorted by
//! UID.

use super::escape::{escape_param_value, escape_text};
use super::fold::fold_line;
use crate::rfc::ical::core::{Component, ComponentKind, ICalendar, Parameter, Property, Value};

/// Serializes an iCalendar document to a string.
#[must_use]
pub fn serialize(ical: &ICalendar) -> String {
    serialize_component(&ical.root)
}

/// Serializes a component and its children.
#[must_use]
pub fn serialize_component(component: &Component) -> String {
    let mut result = fold_line(&format!("BEGIN:{}", component.name()));

    for prop in canonical_property_order(&component.properties, component.kind) {
        result.push_str(&serialize_property(prop));
    }

    for child in canonical_component_order(&component.children) {
        result.push_str(&serialize_component(child));
    }

    result.push_str(&fold_line(&format!("END:{}", component.name())));
    result
}

/// Serializes a property to a folded, CRLF-terminated content line.
#[must_use]
pub fn serialize_property(prop: &Property) -> String {
    let mut line = prop.name.clone();

    for param in &prop.params {
        line.push(';');
        line.push_str(&serialize_parameter(param));
    }

    line.push(':');
    line.push_str(&serialize_value(&prop.value));

    fold_line(&line)
}

fn serialize_parameter(param: &Parameter) -> String {
    let values: Vec<String> = param.values.iter().map(|v| escape_param_value(v)).collect();
    format!("{}={}", param.name, values.join(","))
}

fn serialize_value(value: &Value) -> String {
    match value {
        Value::Text(s) => escape_text(s),
        other => other.to_string(),
    }
}

/// Returns properties in canonical order; unlisted ones keep insertion order
/// after the listed ones.
fn canonical_property_order(props: &[Property], kind: ComponentKind) -> Vec<&Property> {
    let order: &[&str] = match kind {
        ComponentKind::Calendar => &["VERSION", "PRODID"],
        ComponentKind::Event => &[
            "UID",
            "DTSTAMP",
            "DTSTART",
            "DTEND",
            "RRULE",
            "SUMMARY",
            "DESCRIPTION",
        ],
        ComponentKind::Timezone => &["TZID"],
        ComponentKind::Standard | ComponentKind::Daylight => {
            &["DTSTART", "TZOFFSETFROM", "TZOFFSETTO", "TZNAME"]
        }
    };

    let mut ordered: Vec<&Property> = Vec::with_capacity(props.len());
    for &name in order {
        ordered.extend(props.iter().filter(|p| p.name.eq_ignore_ascii_case(name)));
    }
    ordered.extend(
        props
            .iter()
            .filter(|p| !order.iter().any(|n| p.name.eq_ignore_ascii_case(n))),
    );
    ordered
}

/// Non-event children (VTIMEZONE, observances) keep insertion order and come
/// first; events follow, sorted by UID (stable for equal UIDs).
fn canonical_component_order(children: &[Component]) -> Vec<&Component> {
    let (mut events, mut ordered): (Vec<&Component>, Vec<&Component>) = children
        .iter()
        .partition(|c| c.kind == ComponentKind::Event);

    events.sort_by(|a, b| a.uid().unwrap_or("").cmp(b.uid().unwrap_or("")));
    ordered.extend(events);
    ordered
}
