#[cfg(test)]
mod tests {
    use baseline_capture::error::BaselineError;
    use baseline_capture::probe::check_server;

    #[tokio::test]
    async fn probe_accepts_ok_response() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/")
            .with_status(200)
            .with_body("<html></html>")
            .create_async()
            .await;

        assert!(check_server(&server.url()).await.is_ok());
    }

    #[tokio::test]
    async fn probe_accepts_error_status() {
        // Any response means the server is up; only connection failures count
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/")
            .with_status(500)
            .create_async()
            .await;

        assert!(check_server(&server.url()).await.is_ok());
    }

    #[tokio::test]
    async fn probe_reports_unreachable_server() {
        // Nothing listens on this address
        let result = check_server("http://127.0.0.1:1").await;

        match result {
            Err(BaselineError::ServerUnavailable { url, .. }) => {
                assert_eq!(url, "http://127.0.0.1:1");
            }
            other => panic!("expected ServerUnavailable, got {:?}", other.map(|_| ())),
        }
    }
}
