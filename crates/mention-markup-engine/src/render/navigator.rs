use std::fmt;

use crate::annotate::{MentionTarget, MentionType};

/// Host-side navigation surface for clickable markup.
///
/// The host passes an implementation in when a rendered item is
/// activated. One method per entity type.
pub trait EntityNavigator {
    fn open_user(&mut self, id: &str);
    fn open_group(&mut self, id: &str);
    fn open_community(&mut self, id: &str);
    fn open_place(&mut self, id: &str);
    fn open_municipality(&mut self, id: &str);
    fn open_language_area(&mut self, id: &str);
    /// `tag` is lower-cased.
    fn open_hashtag(&mut self, tag: &str);
}

/// Routes a resolved mention to the matching navigator method.
pub fn dispatch_open(target: &MentionTarget, nav: &mut dyn EntityNavigator) {
    let id = target.id.as_str();
    match target.mention_type {
        MentionType::User => nav.open_user(id),
        MentionType::Group => nav.open_group(id),
        MentionType::Community => nav.open_community(id),
        MentionType::Place => nav.open_place(id),
        MentionType::Municipality => nav.open_municipality(id),
        MentionType::LanguageArea => nav.open_language_area(id),
    }
}

/// A navigation request, as recorded by [`EventLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    OpenEntity(MentionTarget),
    OpenHashtag(String),
}

impl fmt::Display for NavigationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationEvent::OpenEntity(target) => {
                write!(f, "open {} {}", target.mention_type, target.id)
            }
            NavigationEvent::OpenHashtag(tag) => write!(f, "open hashtag #{tag}"),
        }
    }
}

/// Navigator that only records what it was asked to open.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<NavigationEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[NavigationEvent] {
        &self.events
    }

    pub fn last(&self) -> Option<&NavigationEvent> {
        self.events.last()
    }

    fn entity(&mut self, mention_type: MentionType, id: &str) {
        log::debug!("navigate: {mention_type} {id}");
        self.events
            .push(NavigationEvent::OpenEntity(MentionTarget::new(mention_type, id)));
    }
}

impl EntityNavigator for EventLog {
    fn open_user(&mut self, id: &str) {
        self.entity(MentionType::User, id);
    }

    fn open_group(&mut self, id: &str) {
        self.entity(MentionType::Group, id);
    }

    fn open_community(&mut self, id: &str) {
        self.entity(MentionType::Community, id);
    }

    fn open_place(&mut self, id: &str) {
        self.entity(MentionType::Place, id);
    }

    fn open_municipality(&mut self, id: &str) {
        self.entity(MentionType::Municipality, id);
    }

    fn open_language_area(&mut self, id: &str) {
        self.entity(MentionType::LanguageArea, id);
    }

    fn open_hashtag(&mut self, tag: &str) {
        log::debug!("navigate: hashtag {tag}");
        self.events.push(NavigationEvent::OpenHashtag(tag.to_string()));
    }
}
