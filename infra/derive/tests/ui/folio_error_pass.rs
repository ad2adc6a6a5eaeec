use folio_derive::folio_error;
use std::borrow::Cow;

#[folio_error]
pub enum LoadError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Unknown page{}: {message}", format_context(.context))]
    UnknownPage { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<String, LoadError> {
    std::fs::read_to_string("missing.toml").context("Reading site config")
}

fn main() {
    let err = read().expect_err("file is missing");
    assert!(err.to_string().contains("(Reading site config)"));

    let internal: LoadError = "boom".into();
    assert!(matches!(internal, LoadError::Internal { .. }));

    let tagged: Result<(), LoadError> =
        Err(LoadError::UnknownPage { message: "bogus".into(), context: None });
    let tagged = tagged.context("resolving fragment").expect_err("still an error");
    assert_eq!(tagged.to_string(), "Unknown page (resolving fragment): bogus");
}
