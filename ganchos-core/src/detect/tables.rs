//! Fixed lookup tables for the stack detector.
//!
//! All tables are ordered slices: declaration order is the tie-break for
//! every "first match wins" heuristic, so reordering entries changes
//! behavior.

/// Extension → language, in precedence order.
pub const LANGUAGE_EXTENSIONS: &[(&str, &[&str])] = &[
    ("JavaScript", &[".js", ".mjs"]),
    ("TypeScript", &[".ts", ".tsx"]),
    ("Python", &[".py"]),
    ("Elixir", &[".ex", ".exs"]),
    ("Ruby", &[".rb"]),
    ("Go", &[".go"]),
    ("Rust", &[".rs"]),
    ("Java", &[".java"]),
    ("PHP", &[".php"]),
    ("C++", &[".cpp", ".cc", ".cxx"]),
    ("C", &[".c"]),
    ("C#", &[".cs"]),
];

/// Manifest file → (keyword, framework name), in precedence order.
pub const FRAMEWORK_MANIFESTS: &[(&str, &[(&str, &str)])] = &[
    (
        "package.json",
        &[
            ("react", "React"),
            ("vue", "Vue.js"),
            ("angular", "Angular"),
            ("express", "Express.js"),
            ("next", "Next.js"),
            ("nuxt", "Nuxt.js"),
            ("svelte", "Svelte"),
            ("gatsby", "Gatsby"),
        ],
    ),
    (
        "requirements.txt",
        &[
            ("django", "Django"),
            ("flask", "Flask"),
            ("fastapi", "FastAPI"),
            ("tornado", "Tornado"),
            ("pyramid", "Pyramid"),
        ],
    ),
    ("mix.exs", &[("phoenix", "Phoenix")]),
    (
        "Gemfile",
        &[("rails", "Ruby on Rails"), ("sinatra", "Sinatra")],
    ),
    (
        "go.mod",
        &[("gin", "Gin"), ("echo", "Echo"), ("fiber", "Fiber")],
    ),
    (
        "Cargo.toml",
        &[("axum", "Axum"), ("actix-web", "Actix-web"), ("warp", "Warp")],
    ),
    (
        "composer.json",
        &[("laravel", "Laravel"), ("symfony", "Symfony")],
    ),
];

/// Project type → root-level indicators, in precedence order.
pub const PROJECT_TYPES: &[(&str, &[&str])] = &[
    ("Web Application", &["public", "static", "assets", "www"]),
    ("API/Backend", &["api", "routes", "controllers"]),
    ("Library/Package", &["lib", "src/lib"]),
    ("CLI Application", &["bin", "cmd", "cli"]),
    ("Mobile App", &["android", "ios", "mobile"]),
    ("Desktop App", &["desktop", "electron"]),
    ("Microservice", &["services", "docker-compose.yml"]),
    ("Data Pipeline", &["pipeline", "etl", "data"]),
    ("Documentation", &["docs", "documentation"]),
];

/// Architecture pattern → indicators that must ALL exist, in precedence
/// order. Indicators match directly under the root or by name anywhere in
/// the tree.
pub const ARCHITECTURE_PATTERNS: &[(&str, &[&str])] = &[
    ("MVC", &["controllers", "models", "views"]),
    ("Component-Based", &["components", "hooks"]),
    ("Service Layer", &["services", "repositories"]),
    ("Microservices", &["services", "docker-compose.yml"]),
    ("Serverless", &["serverless.yml", "sam-template.yaml"]),
    ("Modular Monolith", &["modules", "packages"]),
    (
        "Clean Architecture",
        &["domain", "infrastructure", "application"],
    ),
    ("Hexagonal", &["ports", "adapters"]),
    ("Layered", &["presentation", "business", "data"]),
];

/// Extensions counted as code for the metrics pass.
pub const CODE_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".ts", ".ex", ".exs", ".rb", ".go", ".rs", ".java", ".php", ".cpp", ".c", ".cs",
];

/// Per-language diagnostic focus suggestions shown after detection.
pub const FOCUS_RECOMMENDATIONS: &[(&str, &[&str])] = &[
    (
        "JavaScript",
        &[
            "npm audit for security vulnerabilities",
            "Check for unused dependencies",
            "Analyze bundle size and performance",
            "Review async/await vs Promise patterns",
        ],
    ),
    (
        "TypeScript",
        &[
            "Type safety analysis",
            "Check for any types usage",
            "Interface vs type alias consistency",
            "Strict mode configuration review",
        ],
    ),
    (
        "Python",
        &[
            "Check for security issues with bandit",
            "PEP 8 compliance review",
            "Virtual environment best practices",
            "Type hints coverage analysis",
        ],
    ),
    (
        "Elixir",
        &[
            "OTP principles compliance",
            "GenServer pattern usage review",
            "Supervision tree analysis",
            "Performance bottlenecks in processes",
        ],
    ),
    (
        "Go",
        &[
            "Race condition detection",
            "Goroutine leak analysis",
            "Error handling patterns review",
            "Memory allocation optimization",
        ],
    ),
    (
        "Rust",
        &[
            "Unsafe block audit",
            "Ownership pattern analysis",
            "Cargo security audit",
            "Performance benchmarking",
        ],
    ),
];

/// Fallback recommendation for languages without a dedicated list.
pub const GENERAL_RECOMMENDATIONS: &[&str] = &["General code quality review"];
