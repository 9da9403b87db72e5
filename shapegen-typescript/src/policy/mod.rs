//! Visibility, ordering, naming and enum policy.
//!
//! A [`Policy`] borrows the immutable model and settings; it never caches
//! anything, so independent render passes can each build their own.

mod display;
mod enums;
mod visibility;

use shapegen_codegen::{PlaceholderTemplate, TemplateEngine};
use shapegen_config::Settings;
use shapegen_graph::ApiModel;

pub use display::ExternalTypes;

/// Read-only rendering policy over one model and one configuration.
#[derive(Clone, Copy)]
pub struct Policy<'a> {
    model: &'a ApiModel,
    settings: &'a Settings,
    engine: &'a dyn TemplateEngine,
}

impl<'a> Policy<'a> {
    pub fn new(model: &'a ApiModel, settings: &'a Settings) -> Self {
        Self {
            model,
            settings,
            engine: &PlaceholderTemplate,
        }
    }

    /// Use a different engine for the slice template.
    pub fn with_engine(mut self, engine: &'a dyn TemplateEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn model(&self) -> &'a ApiModel {
        self.model
    }

    pub fn settings(&self) -> &'a Settings {
        self.settings
    }
}

impl std::fmt::Debug for Policy<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Policy")
            .field("packages", &self.model.packages().len())
            .field("settings", self.settings)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod fixture {
    //! A small model shared by the policy tests.

    use shapegen_config::{Config, ExternalPackage, Settings};
    use shapegen_graph::{ApiModel, RawUniverse};

    pub const DOCUMENT: &str = r#"{
        "packages": [
            {
                "path": "example.com/widgets/v1",
                "name": "v1",
                "comments": ["+groupName=example.com"],
                "types": ["Widget", "Color", "Level", "internalState", "WidgetList"],
                "constants": ["ColorRed", "ColorBlue", "LevelHigh", "Unset"]
            }
        ],
        "types": [
            {
                "name": { "package": "example.com/widgets/v1", "name": "Widget" },
                "kind": "Struct",
                "secondClosestCommentLines": ["+kubebuilder:object:root=true"],
                "members": [
                    { "name": "Color", "type": "example.com/widgets/v1.Color", "tags": "json:\"color\"" }
                ]
            },
            {
                "name": { "package": "example.com/widgets/v1", "name": "WidgetList" },
                "kind": "Struct",
                "members": [
                    { "name": "Items", "type": "[]example.com/widgets/v1.Widget", "tags": "json:\"items\"" },
                    { "name": "Meta", "type": "*k8s.io/meta/v1.ListMeta", "tags": "json:\"metadata\"" },
                    { "name": "Index", "type": "map[string]*example.com/widgets/v1.Widget", "tags": "json:\"index\"" }
                ]
            },
            { "name": { "package": "example.com/widgets/v1", "name": "Color" }, "kind": "Alias", "underlying": "string" },
            { "name": { "package": "example.com/widgets/v1", "name": "Level" }, "kind": "Alias", "underlying": "int" },
            { "name": { "package": "example.com/widgets/v1", "name": "internalState" }, "kind": "Struct" },
            { "name": { "package": "example.com/widgets/v1", "name": "ColorRed" }, "kind": "DeclarationOf", "underlying": "example.com/widgets/v1.Color", "constValue": "red" },
            { "name": { "package": "example.com/widgets/v1", "name": "ColorBlue" }, "kind": "DeclarationOf", "underlying": "example.com/widgets/v1.Color", "constValue": "blue" },
            { "name": { "package": "example.com/widgets/v1", "name": "LevelHigh" }, "kind": "DeclarationOf", "underlying": "example.com/widgets/v1.Level", "constValue": "3" },
            { "name": { "package": "example.com/widgets/v1", "name": "Unset" }, "kind": "DeclarationOf", "underlying": "example.com/widgets/v1.Level" },
            { "name": { "name": "[]example.com/widgets/v1.Widget" }, "kind": "Slice", "elem": "example.com/widgets/v1.Widget" },
            { "name": { "name": "*example.com/widgets/v1.Widget" }, "kind": "Pointer", "elem": "example.com/widgets/v1.Widget" },
            { "name": { "name": "map[string]*example.com/widgets/v1.Widget" }, "kind": "Map", "key": "string", "elem": "*example.com/widgets/v1.Widget" },
            { "name": { "name": "*k8s.io/meta/v1.ListMeta" }, "kind": "Pointer", "elem": "k8s.io/meta/v1.ListMeta" },
            { "name": { "package": "k8s.io/meta/v1", "name": "ListMeta" }, "kind": "Struct" }
        ]
    }"#;

    pub fn model() -> ApiModel {
        let universe = RawUniverse::from_str_with_filename(DOCUMENT, "fixture.json").unwrap();
        ApiModel::from_universe(&universe).unwrap()
    }

    pub fn settings() -> Settings {
        let mut config = Config::default();
        config.external_packages = vec![ExternalPackage::new(r"^k8s\.io/")];
        config
            .type_replacements
            .insert("int".to_string(), "number".to_string());
        Settings::new(config).unwrap()
    }
}
