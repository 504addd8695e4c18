//! The static landing page.

const HOME_PAGE: &str = concat!(
    r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>CI/CD Practice App - Axum</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            max-width: 900px;
            margin: 50px auto;
            padding: 20px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            line-height: 1.6;
        }
        .container {
            background: rgba(255, 255, 255, 0.1);
            padding: 40px;
            border-radius: 20px;
            box-shadow: 0 8px 32px 0 rgba(31, 38, 135, 0.37);
            border: 1px solid rgba(255, 255, 255, 0.18);
        }
        .status {
            background: rgba(76, 175, 80, 0.2);
            padding: 20px;
            border-radius: 12px;
            margin: 20px 0;
            border-left: 4px solid #4CAF50;
        }
        .version {
            background: rgba(33, 150, 243, 0.2);
            padding: 15px;
            border-radius: 8px;
            font-family: 'Courier New', monospace;
            border-left: 4px solid #2196F3;
        }
        .api-links {
            background: rgba(255, 152, 0, 0.2);
            padding: 20px;
            border-radius: 12px;
            margin: 20px 0;
            border-left: 4px solid #FF9800;
        }
        .api-links a {
            color: #FFE082;
            text-decoration: none;
            display: inline-block;
            margin: 5px 0;
            padding: 5px 10px;
            background: rgba(255, 255, 255, 0.1);
            border-radius: 5px;
        }
        .badge {
            background: #FF6B6B;
            color: white;
            padding: 4px 12px;
            border-radius: 20px;
            font-size: 0.8em;
            font-weight: bold;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>CI/CD Practice Application <span class="badge">Axum</span></h1>

        <div class="status">
            <h2>Application is running successfully!</h2>
            <p>This is an <strong>Axum</strong> application for
               GitHub Actions CI/CD pipeline practice.</p>
            <p>Includes <strong>automatic API documentation</strong>
               generated from the route definitions.</p>
        </div>

        <div class="version">
            <strong>Version:</strong> "#,
    env!("CARGO_PKG_VERSION"),
    r#"<br>
            <strong>Framework:</strong> Axum<br>
            <strong>Environment:</strong> development<br>
            <strong>Rust:</strong> "#,
    env!("CARGO_PKG_RUST_VERSION"),
    r#"+
        </div>

        <div class="api-links">
            <h3>API Endpoints</h3>
            <p>
                <a href="/health">/health</a> - health check<br>
                <a href="/api/status">/api/status</a> - application status<br>
                <a href="/api/version">/api/version</a> - version information<br>
            </p>

            <h3>API Documentation (generated)</h3>
            <p>
                <a href="/docs">Swagger UI</a> - interactive API documentation<br>
                <a href="/redoc">ReDoc</a> - reference API documentation
            </p>
        </div>
    </div>
</body>
</html>
"#
);

/// The landing page. Identical on every call.
pub fn home_page() -> &'static str {
    HOME_PAGE
}
