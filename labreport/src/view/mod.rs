mod page;
mod panel;

pub use page::{page, CONTENT_ID, MODEL_URL};
pub use panel::{header_id, panel, panel_key};
