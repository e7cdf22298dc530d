use gloo_net::http::Response;
use serde::de::DeserializeOwned;

use joinup_boundary::ErrorResponse;

use crate::Result;

pub(crate) async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(response.json::<ErrorResponse>().await?.into())
    }
}
