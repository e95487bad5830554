// src/parser/swagger.rs

use serde_json::{Error as JsonError, Map, Value};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to fetch specification: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Failed to fetch specification from {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] JsonError),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Unsupported OpenAPI version")]
    UnsupportedVersion,

    #[error("Invalid OpenAPI specification: {0}")]
    InvalidSpec(String),
}

pub type Result<T> = std::result::Result<T, LoadError>;

/// HTTP methods that may appear as keys of a path item
const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Where a specification document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecLocation {
    Url(String),
    File(PathBuf),
}

impl SpecLocation {
    /// Anything that isn't an http(s) URL is treated as a filesystem path
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            SpecLocation::Url(location.to_string())
        } else {
            SpecLocation::File(PathBuf::from(location))
        }
    }
}

/// Document flavour, detected from the top-level `swagger`/`openapi` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecVersion {
    Swagger2,
    OpenApi3,
}

/// Represents a parsed OpenAPI/Swagger specification
#[derive(Debug, Clone)]
pub struct SwaggerSpec {
    /// The raw JSON Value of the parsed specification
    pub raw_spec: Value,

    /// Which specification format the document follows
    pub version: SpecVersion,

    /// Every (path, method) pair of the document, in document order
    pub operations: Vec<ApiOperation>,
}

/// Represents an API operation (HTTP method + path)
#[derive(Debug, Clone, PartialEq)]
pub struct ApiOperation {
    /// The path template (e.g., "/users/{id}")
    pub path: String,

    /// HTTP method, upper-cased (GET, POST, ...)
    pub method: String,

    /// Summary of what the operation does
    pub summary: Option<String>,

    /// Parameters declared directly on the operation
    pub parameters: Vec<ApiParameter>,

    /// Possible responses, keyed by status code
    pub responses: Vec<ApiResponse>,
}

/// Represents a parameter in an API operation
#[derive(Debug, Clone, PartialEq)]
pub struct ApiParameter {
    /// Name of the parameter
    pub name: String,

    /// Location of the parameter (path, query, header, body, ...)
    pub location: String,

    pub description: Option<String>,
}

/// Represents a possible API response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code, or "default"
    pub status_code: String,

    pub description: Option<String>,
}

/// Load a specification from a URL or a local file
pub async fn load_spec(location: &SpecLocation) -> Result<SwaggerSpec> {
    match location {
        SpecLocation::Url(url) => fetch_swagger_url(url).await,
        SpecLocation::File(path) => parse_swagger_file(path),
    }
}

/// Fetch and parse a Swagger/OpenAPI specification served over HTTP
pub async fn fetch_swagger_url(url: &str) -> Result<SwaggerSpec> {
    debug!("Fetching specification from {}", url);
    let response = reqwest::get(url).await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let content = response.text().await?;
    parse_swagger_string(&content)
}

/// Parse a Swagger/OpenAPI specification from a file
pub fn parse_swagger_file<P: AsRef<Path>>(path: P) -> Result<SwaggerSpec> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;

    parse_swagger_string(&content)
}

/// Parse a Swagger/OpenAPI specification from a JSON or YAML string
pub fn parse_swagger_string(content: &str) -> Result<SwaggerSpec> {
    let spec: Value = if content.trim_start().starts_with('{') {
        serde_json::from_str(content)?
    } else {
        serde_yaml::from_str(content)?
    };

    // Determine version and validate
    let swagger_version = spec.get("swagger").and_then(Value::as_str);
    let openapi_version = spec.get("openapi").and_then(Value::as_str);

    let version = match (swagger_version, openapi_version) {
        (Some("2.0"), _) => SpecVersion::Swagger2,
        (_, Some(v)) if v.starts_with("3.") => SpecVersion::OpenApi3,
        _ => return Err(LoadError::UnsupportedVersion),
    };

    let operations = extract_operations(&spec)?;
    debug!("Extracted {} operations ({:?})", operations.len(), version);

    Ok(SwaggerSpec {
        raw_spec: spec,
        version,
        operations,
    })
}

/// Turn every (path, method) entry of the `paths` map into an operation
pub fn extract_operations(spec: &Value) -> Result<Vec<ApiOperation>> {
    let paths_map = match spec.get("paths") {
        Some(Value::Object(paths)) => paths,
        Some(_) => return Err(LoadError::InvalidSpec("paths must be an object".into())),
        None => return Err(LoadError::InvalidSpec("No paths defined".into())),
    };

    let mut operations = Vec::new();

    for (path, path_item) in paths_map {
        let Some(path_obj) = path_item.as_object() else {
            continue;
        };

        for (method, operation) in path_obj {
            // Skip non-HTTP method keys
            if !HTTP_METHODS.contains(&method.as_str()) {
                continue;
            }

            if let Some(op_obj) = operation.as_object() {
                operations.push(parse_operation(spec, path, method, op_obj));
            }
        }
    }

    Ok(operations)
}

fn parse_operation(spec: &Value, path: &str, method: &str, op_obj: &Map<String, Value>) -> ApiOperation {
    let summary = op_obj
        .get("summary")
        .and_then(Value::as_str)
        .map(String::from);

    let parameters = op_obj
        .get("parameters")
        .and_then(Value::as_array)
        .map(|params| {
            params
                .iter()
                .map(|param| parse_parameter(spec, param))
                .collect()
        })
        .unwrap_or_default();

    let mut responses = Vec::new();

    if let Some(resp_obj) = op_obj.get("responses").and_then(Value::as_object) {
        for (status_code, response) in resp_obj {
            let response = resolve_ref(spec, response).unwrap_or(response);
            let description = response
                .get("description")
                .and_then(Value::as_str)
                .map(String::from);

            responses.push(ApiResponse {
                status_code: status_code.clone(),
                description,
            });
        }
    }

    ApiOperation {
        path: path.to_string(),
        method: method.to_uppercase(),
        summary,
        parameters,
        responses,
    }
}

fn parse_parameter(spec: &Value, param: &Value) -> ApiParameter {
    let resolved = match resolve_ref(spec, param) {
        Some(target) => target,
        None => {
            if let Some(reference) = param.get("$ref").and_then(Value::as_str) {
                // Keep something recognisable in the prompt rather than an empty name
                warn!("Unresolved parameter reference {}", reference);
                return ApiParameter {
                    name: reference.rsplit('/').next().unwrap_or(reference).to_string(),
                    location: String::new(),
                    description: None,
                };
            }
            param
        }
    };

    let name = resolved
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let location = resolved
        .get("in")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let description = resolved
        .get("description")
        .and_then(Value::as_str)
        .map(String::from);

    ApiParameter {
        name,
        location,
        description,
    }
}

/// Follow a local `$ref` ("#/components/parameters/Id") inside the same document
fn resolve_ref<'a>(spec: &'a Value, node: &Value) -> Option<&'a Value> {
    let reference = node.get("$ref")?.as_str()?;
    let pointer = reference.strip_prefix('#')?;
    spec.pointer(pointer)
}
