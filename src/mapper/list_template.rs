//! SharePoint list template identifiers

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListTemplateType {
    GenericList,
    DocumentLibrary,
    Survey,
    Links,
    Announcements,
    Contacts,
    Events,
    Tasks,
    DiscussionBoard,
    PictureLibrary,
    IssueTracking,
    TasksWithTimelineAndHierarchy,
}

impl ListTemplateType {
    pub fn id(&self) -> i32 {
        match self {
            ListTemplateType::GenericList => 100,
            ListTemplateType::DocumentLibrary => 101,
            ListTemplateType::Survey => 102,
            ListTemplateType::Links => 103,
            ListTemplateType::Announcements => 104,
            ListTemplateType::Contacts => 105,
            ListTemplateType::Events => 106,
            ListTemplateType::Tasks => 107,
            ListTemplateType::DiscussionBoard => 108,
            ListTemplateType::PictureLibrary => 109,
            ListTemplateType::IssueTracking => 1100,
            ListTemplateType::TasksWithTimelineAndHierarchy => 171,
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        let template = match id {
            100 => ListTemplateType::GenericList,
            101 => ListTemplateType::DocumentLibrary,
            102 => ListTemplateType::Survey,
            103 => ListTemplateType::Links,
            104 => ListTemplateType::Announcements,
            105 => ListTemplateType::Contacts,
            106 => ListTemplateType::Events,
            107 => ListTemplateType::Tasks,
            108 => ListTemplateType::DiscussionBoard,
            109 => ListTemplateType::PictureLibrary,
            171 => ListTemplateType::TasksWithTimelineAndHierarchy,
            1100 => ListTemplateType::IssueTracking,
            _ => return None,
        };
        Some(template)
    }
}

impl Default for ListTemplateType {
    fn default() -> Self {
        ListTemplateType::GenericList
    }
}
