/*!
 * Edit transcript parsing for the speech editing gallery.
 */

pub mod markers;

pub use markers::{DiffSegment, EditDocument, parse_edit_markers};
