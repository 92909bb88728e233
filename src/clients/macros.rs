/// Generates a client method that sends a request with a oneshot reply
/// channel and awaits the answer. Channel failures become
/// `ServiceError::ActorCommunication`; domain failures pass through as
/// `ServiceError::Vending`.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $crate::machine_actor::ServiceError> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|_| $crate::machine_actor::ServiceError::ActorCommunication("Actor closed".to_string()))?;

                response
                    .await
                    .map_err(|_| $crate::machine_actor::ServiceError::ActorCommunication("Actor dropped".to_string()))?
                    .map_err($crate::machine_actor::ServiceError::from)
            }
        }
    };
}
