use bemkit_derive::bem_error;
use std::borrow::Cow;

#[bem_error]
pub enum LoadError {
    #[error("Read failure{}: {source}", format_context(.context))]
    Read {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Missing block{}: {message}", format_context(.context))]
    MissingBlock { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<String, LoadError> {
    std::fs::read_to_string("definition.json").context("Reading definition")
}

fn main() {
    let _ = read();
    let err: LoadError = "boom".into();
    let err = Err::<(), _>(err).context("while testing").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (while testing): boom");
}
