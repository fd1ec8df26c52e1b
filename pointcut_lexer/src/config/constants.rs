pub mod compile_time {
    pub mod lexical {
        /// Maximum pointcut expression length in characters
        /// SECURITY: Prevents DoS attacks via enormous expressions
        pub const MAX_EXPRESSION_LENGTH: usize = 4096;

        /// Maximum number of tokens produced by a single tokenize pass
        /// SECURITY: Prevents DoS via token explosion attacks
        pub const MAX_TOKEN_COUNT: usize = 2048;
    }

    pub mod logging {
        /// Log buffer size for the in-memory test logger
        /// RESOURCE: Controls memory usage for captured events
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Maximum log message length
        /// RESOURCE: Prevents memory attacks via huge messages
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 10_000;

        /// Minimum log level for security events (cannot be changed at runtime)
        /// SECURITY: Ensures security events are always logged
        pub const SECURITY_MIN_LOG_LEVEL: u8 = 1; // Warning level minimum
    }
}
