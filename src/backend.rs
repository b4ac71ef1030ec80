//! Registered code generation backends.
//!
//! The generators themselves live outside this crate. A backend here only
//! describes itself: its name, the language it targets, and the options it
//! accepts, which is what help rendering and option checks need.

use crate::compact::LangSpec;

/// A documented backend option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDoc {
    pub name: String,
    pub desc: String,
    /// Takes `true`, `false` or no value at all.
    pub boolean: bool,
}

impl OptionDoc {
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
            boolean: false,
        }
    }

    pub fn flag(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            boolean: true,
            ..Self::new(name, desc)
        }
    }
}

/// Trait implemented by every backend known to the compiler.
pub trait Backend {
    /// Name of the backend, as shown in the help listing.
    fn name(&self) -> &str;

    /// Target language, as used with `-g`.
    fn lang(&self) -> &str;

    /// Options in the order they should be listed.
    fn options(&self) -> &[OptionDoc];
}

/// Descriptor of the Go backend.
pub struct GoBackend {
    options: Vec<OptionDoc>,
}

impl GoBackend {
    pub fn new() -> Self {
        let options = vec![
            OptionDoc::new("thrift_import_path", "Override the thrift package import path."),
            OptionDoc::new("use_package", "Specify an import path for a package: path=repl."),
            OptionDoc::new("naming_style", "Naming style for identifiers: golint, apache or thriftgo."),
            OptionDoc::flag("ignore_initialisms", "Disable spelling correction of initialisms."),
            OptionDoc::new("package_prefix", "Prefix prepended to the import path of generated packages."),
            OptionDoc::flag("gen_setter", "Generate Set* methods for fields."),
            OptionDoc::flag("gen_deep_equal", "Generate DeepEqual for structs, unions and exceptions."),
            OptionDoc::flag("compatible_names", "Add a '_' suffix to names that collide with generated methods."),
            OptionDoc::flag("reserve_comments", "Keep IDL comments in the generated code."),
            OptionDoc::flag("nil_safe", "Generate nil-safe getters."),
            OptionDoc::flag("gen_json_tag", "Generate json tags for struct fields."),
            OptionDoc::flag("json_stringer", "Generate a JSON-based String method."),
            OptionDoc::flag("with_reflection", "Generate reflection information."),
            OptionDoc::flag("no_fmt", "Do not run gofmt on the generated code."),
        ];

        Self { options }
    }
}

impl Default for GoBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for GoBackend {
    fn name(&self) -> &str {
        "thriftgo"
    }

    fn lang(&self) -> &str {
        "go"
    }

    fn options(&self) -> &[OptionDoc] {
        &self.options
    }
}

/// Returns every registered backend, in listing order.
pub fn all_backends() -> Vec<Box<dyn Backend>> {
    vec![Box::new(GoBackend::new())]
}

/// Finds the backend generating `lang`.
pub fn find_backend<'a>(backends: &'a [Box<dyn Backend>], lang: &str) -> Option<&'a dyn Backend> {
    backends
        .iter()
        .find(|backend| backend.lang() == lang)
        .map(|backend| &**backend)
}

/// Warnings about requested targets that no backend can honour: unknown
/// languages, undeclared options and malformed boolean values.
pub fn check_targets(backends: &[Box<dyn Backend>], targets: &[LangSpec]) -> Vec<String> {
    let mut warnings = Vec::new();
    for target in targets {
        let Some(backend) = find_backend(backends, &target.language) else {
            warnings.push(format!(
                "No backend registered for language {:?}",
                target.language
            ));
            continue;
        };

        for option in &target.options {
            match backend.options().iter().find(|doc| doc.name == option.key) {
                None => warnings.push(format!(
                    "Option {:?} is not recognized by backend {}",
                    option.key,
                    backend.name()
                )),
                Some(doc) if doc.boolean => {
                    if let Err(err) = target.flag(&option.key) {
                        warnings.push(err.to_string());
                    }
                }
                Some(_) => {}
            }
        }
    }
    warnings
}
