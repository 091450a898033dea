mod answer;
mod input;
mod metadata;
mod reference;
mod status;
mod tables;
mod tabs;

pub(crate) use answer::render_answer;
pub(crate) use input::{input_height, render_input_panel};
pub(crate) use metadata::{METADATA_WIDTH, render_metadata};
pub(crate) use reference::render_reference;
pub(crate) use status::{DETAILS_HEIGHT, hint_line, render_details, render_error, render_notice};
pub(crate) use tables::{TableSpec, render_match_table};
pub(crate) use tabs::{HeaderContext, ProgressState, render_header_with_tabs};
