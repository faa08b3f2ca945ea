//! iCalendar component types (RFC 5545 §3.4-3.6).

use super::Property;
use super::property::names;

/// The component kinds this crate writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Calendar,
    Event,
    Timezone,
    Standard,
    Daylight,
}

impl ComponentKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => "VCALENDAR",
            Self::Event => "VEVENT",
            Self::Timezone => "VTIMEZONE",
            Self::Standard => "STANDARD",
            Self::Daylight => "DAYLIGHT",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An iCalendar component with its properties and nested components.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub kind: ComponentKind,
    /// Properties in insertion order.
    pub properties: Vec<Property>,
    pub children: Vec<Component>,
}

impl Component {
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn event() -> Self {
        Self::new(ComponentKind::Event)
    }

    /// Name written on the BEGIN/END lines.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn add_property(&mut self, prop: Property) {
        self.properties.push(prop);
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.get_property(names::UID)?.as_text()
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.get_property(names::SUMMARY)?.as_text()
    }

    /// Returns all VEVENT children.
    #[must_use]
    pub fn events(&self) -> Vec<&Component> {
        self.children
            .iter()
            .filter(|c| c.kind == ComponentKind::Event)
            .collect()
    }
}

/// Top-level iCalendar object wrapping the VCALENDAR component.
#[derive(Debug, Clone, PartialEq)]
pub struct ICalendar {
    pub root: Component,
}

impl ICalendar {
    /// Creates an empty calendar carrying VERSION and PRODID.
    #[must_use]
    pub fn new(prodid: impl Into<String>) -> Self {
        let mut root = Component::new(ComponentKind::Calendar);
        root.add_property(Property::text(names::VERSION, "2.0"));
        root.add_property(Property::text(names::PRODID, prodid));
        Self { root }
    }

    #[must_use]
    pub fn prodid(&self) -> Option<&str> {
        self.root.get_property(names::PRODID)?.as_text()
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.root.get_property(names::VERSION)?.as_text()
    }

    pub fn add_property(&mut self, prop: Property) {
        self.root.add_property(prop);
    }

    pub fn add_event(&mut self, event: Component) {
        self.root.children.push(event);
    }

    pub fn add_timezone(&mut self, timezone: Component) {
        self.root.children.push(timezone);
    }

    /// Returns all VTIMEZONE children.
    #[must_use]
    pub fn timezones(&self) -> Vec<&Component> {
        self.root
            .children
            .iter()
            .filter(|c| c.kind == ComponentKind::Timezone)
            .collect()
    }

    #[must_use]
    pub fn events(&self) -> Vec<&Component> {
        self.root.events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icalendar_new() {
        let ical = ICalendar::new("-//Test//Test//EN");
        assert_eq!(ical.version(), Some("2.0"));
        assert_eq!(ical.prodid(), Some("-//Test//Test//EN"));
        assert!(ical.events().is_empty());
    }

    #[test]
    fn component_lookup_is_case_insensitive() {
        let mut event = Component::event();
        event.add_property(Property::text("uid", "lecture-1"));
        event.add_property(Property::text("SUMMARY", "Algorithms"));

        assert_eq!(event.uid(), Some("lecture-1"));
        assert_eq!(event.summary(), Some("Algorithms"));
        assert!(event.get_property("Summary").is_some());
    }

    #[test]
    fn events_are_kept_in_insertion_order() {
        let mut ical = ICalendar::new("-//Test//Test//EN");
        for uid in ["b", "a"] {
            let mut event = Component::event();
            event.add_property(Property::text(names::UID, uid));
            ical.add_event(event);
        }

        let uids: Vec<_> = ical.events().iter().filter_map(|e| e.uid()).collect();
        assert_eq!(uids, ["b", "a"]);
        assert_eq!(ical.root.name(), "VCALENDAR");
    }
}
