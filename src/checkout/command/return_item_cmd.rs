use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ReturnItemCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl ReturnItemCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnItemCommandRequest {
    pub(crate) isbn: String,
}

impl ReturnItemCommandRequest {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct ReturnItemCommandResponse {
    pub returned: usize,
}

impl ReturnItemCommandResponse {
    pub fn new(returned: usize) -> Self {
        Self {
            returned,
        }
    }
}

#[async_trait]
impl Command<ReturnItemCommandRequest, ReturnItemCommandResponse> for ReturnItemCommand {
    async fn execute(&self, req: ReturnItemCommandRequest) -> Result<ReturnItemCommandResponse, CommandError> {
        self.checkout_service.returned(req.isbn.as_str())
            .await.map_err(CommandError::from).map(ReturnItemCommandResponse::new)
    }
}
