use crate::context::TestContext;

/// Canned response for one request path.
struct MockRoute {
    path: String,
    status: usize,
    body: String,
    json: bool,
    expected_hits: Option<usize>,
}

/// Builder for creating test contexts backed by a local mock HTTP server.
///
/// Every route answers `GET` requests for an exact path regardless of the query
/// string. Requests to paths without a route get mockito's default `501`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_status("/pokemon/missingno", 404)
///     .build()
///     .await;
/// ```
pub struct TestBuilder {
    routes: Vec<MockRoute>,
    required_headers: Vec<(String, String)>,
}

impl TestBuilder {
    /// Creates a new test builder with no routes configured.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            required_headers: Vec::new(),
        }
    }

    /// Answers `path` with a JSON body.
    ///
    /// # Arguments
    /// - `path` - Exact request path, e.g. `/repos/owner/name/issues`
    /// - `status` - HTTP status code to return
    /// - `body` - JSON payload, usually built with a `fixture` function
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_json(mut self, path: &str, status: usize, body: serde_json::Value) -> Self {
        self.routes.push(MockRoute {
            path: path.to_string(),
            status,
            body: body.to_string(),
            json: true,
            expected_hits: None,
        });
        self
    }

    /// Answers `path` with an arbitrary, possibly non-JSON body.
    pub fn with_raw(mut self, path: &str, status: usize, body: &str) -> Self {
        self.routes.push(MockRoute {
            path: path.to_string(),
            status,
            body: body.to_string(),
            json: false,
            expected_hits: None,
        });
        self
    }

    /// Answers `path` with a status code and an empty body.
    pub fn with_status(self, path: &str, status: usize) -> Self {
        self.with_raw(path, status, "")
    }

    /// Sets how many times the most recently added route must be hit.
    ///
    /// Checked by `TestContext::assert_hits`.
    pub fn expect_hits(mut self, hits: usize) -> Self {
        if let Some(route) = self.routes.last_mut() {
            route.expected_hits = Some(hits);
        }
        self
    }

    /// Requires every request to carry `name: value`.
    ///
    /// Requests without the header do not match any route and receive `501`.
    pub fn require_header(mut self, name: &str, value: &str) -> Self {
        self.required_headers
            .push((name.to_string(), value.to_string()));
        self
    }

    /// Starts the mock server and registers every configured route.
    ///
    /// # Returns
    /// - `TestContext` - Running server; dropped at the end of the test
    pub async fn build(self) -> TestContext {
        let mut server = mockito::Server::new_async().await;
        let mut mocks = Vec::with_capacity(self.routes.len());

        for route in self.routes {
            let mut mock = server
                .mock("GET", route.path.as_str())
                .match_query(mockito::Matcher::Any)
                .with_status(route.status)
                .with_body(route.body);

            if route.json {
                mock = mock.with_header("content-type", "application/json");
            }

            for (name, value) in &self.required_headers {
                mock = mock.match_header(name.as_str(), value.as_str());
            }

            if let Some(hits) = route.expected_hits {
                mock = mock.expect(hits);
            }

            let checked = route.expected_hits.is_some();
            mocks.push((mock.create_async().await, checked));
        }

        TestContext::new(server, mocks)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
