// This file contains the parser module, responsible for loading and interpreting the Swagger document.

pub mod swagger;

pub use swagger::{
    extract_operations,
    fetch_swagger_url,
    load_spec,
    parse_swagger_file,
    parse_swagger_string,
    ApiOperation,
    ApiParameter,
    ApiResponse,
    LoadError,
    Result,
    SpecLocation,
    SpecVersion,
    SwaggerSpec,
};
