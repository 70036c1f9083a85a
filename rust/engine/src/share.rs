use crate::errors::ShareError;

/// Host-provided way of handing invitation text to other apps.
pub trait ShareTarget {
    fn share(&mut self, text: &str) -> Result<(), ShareError>;
}

impl<F> ShareTarget for F
where
    F: FnMut(&str) -> Result<(), ShareError>,
{
    fn share(&mut self, text: &str) -> Result<(), ShareError> {
        self(text)
    }
}
