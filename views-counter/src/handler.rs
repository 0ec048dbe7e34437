use {
    std::sync::Arc,
    serde::{Serialize, Deserialize},
    serde_json::Value,
    tracing::{info, error},
    lambda_runtime::{LambdaEvent, service_fn},
    crate::{
        counter::CounterService,
        error::CounterError,
        store::CounterStore,
    },
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
pub struct ViewsResponse {
    pub views: u64,
}

/// One invocation: payload and context carry no input, the context only tags the logs.
pub async fn handle_request<S: CounterStore>(service: &CounterService<S>, event: LambdaEvent<Value>) -> Result<ViewsResponse, CounterError> {
    let request_id = event.context.request_id;
    match service.increment_and_store().await {
        Ok(views) => {
            info!(%request_id, views, "counter incremented");
            Ok(ViewsResponse { views })
        },
        Err(err) => {
            error!(%request_id, "failed to increment counter: {err}");
            Err(err)
        },
    }
}

/// Runs the lambda invocation loop until the host shuts the process down.
pub async fn serve<S: CounterStore + Send + Sync + 'static>(service: Arc<CounterService<S>>) -> Result<(), lambda_runtime::Error> {
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let service = service.clone();
        async move {
            handle_request(&service, event).await
                .map_err(lambda_runtime::Error::from)
        }
    })).await
}
