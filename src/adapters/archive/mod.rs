pub mod zip_comment;
