#[cfg(test)]
mod tests {
    use occurrence::libs::clipboard::{copy_to_clipboard, platform_candidates, ClipboardError};
    use occurrence::libs::config::{ClipboardConfig, Config};

    fn with_program(program: &str, args: &[&str]) -> Config {
        Config {
            clipboard: Some(ClipboardConfig {
                program: program.to_string(),
                args: args.iter().map(|a| a.to_string()).collect(),
            }),
            ..Config::default()
        }
    }

    #[test]
    fn test_platform_has_candidates() {
        assert!(!platform_candidates().is_empty());
    }

    #[tokio::test]
    async fn test_missing_program_is_unavailable() {
        let config = with_program("occurrence-no-such-clipboard", &[]);
        match copy_to_clipboard("texto", &config).await {
            Err(ClipboardError::Unavailable(tried)) => assert_eq!(tried, "occurrence-no-such-clipboard"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_program_receiving_text() {
        let config = with_program("cat", &[]);
        assert!(copy_to_clipboard("Informo que o carro 12345", &config).await.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_program_closing_stdin_early() {
        // Larger than a pipe buffer, so the write cannot complete
        let text = "x".repeat(4 * 1024 * 1024);
        let config = with_program("true", &[]);

        match copy_to_clipboard(&text, &config).await {
            Err(ClipboardError::Io { program, source }) => {
                assert_eq!(program, "true");
                assert_eq!(source.kind(), std::io::ErrorKind::BrokenPipe);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_program_is_reported() {
        let config = with_program("sh", &["-c", "cat > /dev/null; exit 3"]);
        match copy_to_clipboard("texto", &config).await {
            Err(ClipboardError::Failed { program, .. }) => assert_eq!(program, "sh"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
