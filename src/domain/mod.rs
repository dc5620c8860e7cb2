pub mod declaration;
pub mod environment;
pub mod environment_conf;
pub mod error;
pub mod manifest_path;
pub mod qualified_name;
pub mod search_path;

pub use declaration::{DECLARATION_KEYWORD, DeclarationPattern};
pub use environment::{EnvironmentContext, MODULES_DIR, SearchPathStrategy};
pub use environment_conf::{
    BASEMODULEPATH_PLACEHOLDER, MODULEPATH_SETTING, ModulePathError, expand_basemodulepath,
    find_modulepath,
};
pub use error::AppError;
pub use manifest_path::{MANIFEST_EXTENSION, MANIFESTS_DIR, manifest_path};
pub use qualified_name::{NAMESPACE_DELIMITER, QualifiedName};
pub use search_path::{PATH_DELIMITER, SearchPath};
