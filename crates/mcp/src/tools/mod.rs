pub mod drafts;
mod registry;

pub use drafts::{CreateDraftTool, RecentlyScheduledTool};
pub use registry::{
    json_schema_boolean, json_schema_object, json_schema_string, json_schema_string_enum, Tool,
    ToolRegistry,
};
