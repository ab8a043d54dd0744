use serde::Deserialize;

/// GivEnergy Cloud wraps every payload into a `data` envelope.
#[derive(Deserialize)]
pub struct Response<R> {
    pub data: R,
}
