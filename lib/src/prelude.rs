use crate::error::Error;
use crate::Client;

/// A request to the files API, consumed when executed.
#[async_trait::async_trait]
pub trait HttpCommand {
    type Output;

    async fn execute(self, client: &Client) -> Result<Self::Output, Error>;
}
