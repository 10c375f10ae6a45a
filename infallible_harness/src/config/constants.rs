pub mod compile_time {
    pub mod source {
        /// Maximum source file size accepted by the pipeline (10MB)
        pub const MAX_SOURCE_FILE_SIZE: u64 = 10 * 1024 * 1024;

        /// Encoding used when a configuration names none
        pub const DEFAULT_ENCODING: &str = "utf-8";
    }

    pub mod resolution {
        /// Registered names offered alongside a not-found symbol
        pub const MAX_SYMBOL_SUGGESTIONS: usize = 3;

        pub const LEXER_SUFFIX: &str = "Lexer";
        pub const PARSER_SUFFIX: &str = "Parser";
    }

    pub mod discovery {
        /// Include pattern applied to a file set that declares none
        pub const DEFAULT_INCLUDE_PATTERN: &str = "**/*";
    }

    pub mod report {
        pub const SEPARATOR: &str = "-------------------------------------------------------";
        pub const TITLE: &str = "Grammar Conformance Test";
    }
}
