use folio_derive::folio_error;

#[folio_error]
pub enum LoadError {
    #[error("Internal error: {message}")]
    Internal { message: String, context: Option<String> },
}

fn main() {}
