mod header;
pub use header::TagHeader;

mod frame;
pub use frame::Frame;
pub use frame::FramePayload;
pub use frame::TextEncoding;
pub(crate) use frame::is_year_frame;

mod tag;
pub use tag::ParsedTag;
