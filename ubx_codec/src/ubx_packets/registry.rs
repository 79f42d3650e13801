use std::{borrow::Cow, collections::HashMap};

use lazy_static::lazy_static;

use super::{packets, Direction, MessageLayout};
use crate::error::UnknownLayoutError;

/// Catalogue entry for one class/id pair
#[derive(Debug, Clone, Copy)]
pub struct MessageDef {
    pub class: u8,
    pub id: u8,
    pub name: &'static str,
    pub get: &'static [MessageLayout],
    pub set: &'static [MessageLayout],
    pub poll: &'static [MessageLayout],
}

impl MessageDef {
    /// Entry known by name only, every payload decodes raw
    pub const fn named(class: u8, id: u8, name: &'static str) -> Self {
        Self {
            class,
            id,
            name,
            get: &[],
            set: &[],
            poll: &[],
        }
    }

    /// Candidate layouts, ordered as authored
    pub fn layouts(&self, direction: Direction) -> &'static [MessageLayout] {
        match direction {
            Direction::Get => self.get,
            Direction::Set => self.set,
            Direction::Poll => self.poll,
        }
    }
}

lazy_static! {
    static ref REGISTRY: Registry = Registry::build();
}

/// Read-only lookup over the static message catalogue.
///
/// Built on first use and shared by every parse and build call.
#[derive(Debug)]
pub struct Registry {
    messages: HashMap<(u8, u8), &'static MessageDef>,
    classes: HashMap<u8, &'static str>,
}

impl Registry {
    pub fn global() -> &'static Registry {
        &REGISTRY
    }

    fn build() -> Self {
        let mut messages = HashMap::new();
        for def in packets::MESSAGES.iter().flat_map(|group| group.iter()) {
            let prev = messages.insert((def.class, def.id), def);
            debug_assert!(prev.is_none(), "{} registered twice", def.name);
        }
        let classes = packets::CLASSES.iter().copied().collect();
        log::trace!("message registry built with {} entries", messages.len());
        Self { messages, classes }
    }

    pub fn message(&self, class: u8, msg_id: u8) -> Option<&'static MessageDef> {
        self.messages.get(&(class, msg_id)).copied()
    }

    /// Message name such as `NAV-VELNED`, or `GLL` for NMEA ids
    pub fn name(&self, class: u8, msg_id: u8) -> Option<&'static str> {
        self.message(class, msg_id).map(|def| def.name)
    }

    /// Class name such as `NAV` or `NMEA-Standard`
    pub fn class_name(&self, class: u8) -> Option<&'static str> {
        self.classes.get(&class).copied()
    }

    /// Message name, falling back to the raw class/id bytes when unknown
    pub fn identity(&self, class: u8, msg_id: u8) -> Cow<'static, str> {
        match self.name(class, msg_id) {
            Some(name) => Cow::Borrowed(name),
            None => match self.class_name(class) {
                Some(class_name) => Cow::Owned(format!("{}-{:#04x}", class_name, msg_id)),
                None => Cow::Owned(format!("UNKNOWN-{:#04x}-{:#04x}", class, msg_id)),
            },
        }
    }

    pub fn layouts(&self, class: u8, msg_id: u8, direction: Direction) -> &'static [MessageLayout] {
        self.message(class, msg_id)
            .map(|def| def.layouts(direction))
            .unwrap_or(&[])
    }

    /// Picks the layout for a payload of `len` bytes.
    ///
    /// An exact fixed-length match wins; otherwise the first layout with a
    /// repeating tail that divides the remaining bytes evenly.
    pub fn resolve(
        &self,
        class: u8,
        msg_id: u8,
        direction: Direction,
        len: usize,
    ) -> Result<&'static MessageLayout, UnknownLayoutError> {
        let layouts = self.layouts(class, msg_id, direction);
        layouts
            .iter()
            .find(|l| l.repeat_group().is_none() && l.fixed_len() == len)
            .or_else(|| {
                layouts
                    .iter()
                    .find(|l| l.repeat_group().is_some() && l.matches_len(len))
            })
            .ok_or(UnknownLayoutError {
                class,
                msg_id,
                direction,
                len,
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static MessageDef> + '_ {
        self.messages.values().copied()
    }
}
