//! Textmate token color rules.
//!
//! Rule order matters: when several rules name the same scope, the last
//! one wins, both in VS Code and in the readability audit's lookup.

use serde::{Deserialize, Serialize};

use crate::palette::{
    ACCENTS, CYANS, FOREGROUNDS, GREYS, HOLOGRAM, MAGICAL_MIRAI, MIKU_EXPO, MIKU_NT, PINKS,
    PROJECT_DIVA, PROJECT_SEKAI, RACING_MIKU, SEMANTIC, SNOW_MIKU, TEALS, VERSION_MAPPING,
};

/// Style settings applied to a token scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(rename = "fontStyle", skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
}

/// One named rule binding textmate scopes to settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenColorRule {
    pub name: String,
    pub scope: Vec<String>,
    pub settings: TokenSettings,
}

fn rule(name: &str, scope: &[&str], foreground: &str) -> TokenColorRule {
    TokenColorRule {
        name: name.to_string(),
        scope: scope.iter().map(|s| s.to_string()).collect(),
        settings: TokenSettings {
            foreground: Some(foreground.to_string()),
            font_style: None,
        },
    }
}

fn styled(name: &str, scope: &[&str], foreground: &str, font_style: &str) -> TokenColorRule {
    TokenColorRule {
        name: name.to_string(),
        scope: scope.iter().map(|s| s.to_string()).collect(),
        settings: TokenSettings {
            foreground: Some(foreground.to_string()),
            font_style: Some(font_style.to_string()),
        },
    }
}

fn style_only(name: &str, scope: &[&str], font_style: &str) -> TokenColorRule {
    TokenColorRule {
        name: name.to_string(),
        scope: scope.iter().map(|s| s.to_string()).collect(),
        settings: TokenSettings {
            foreground: None,
            font_style: Some(font_style.to_string()),
        },
    }
}

/// Build the full token color table.
pub fn token_colors() -> Vec<TokenColorRule> {
    vec![
        // Comments
        styled(
            "Comments",
            &["comment", "punctuation.definition.comment"],
            GREYS.platinum,
            "italic",
        ),
        styled(
            "Documentation Comments",
            &[
                "comment.block.documentation",
                "comment.line.documentation",
                "comment.block.javadoc",
            ],
            GREYS.platinum,
            "italic",
        ),
        // Keywords
        styled(
            "Control Keywords",
            &["keyword.control", "keyword.control.flow", "keyword.control.import"],
            TEALS.classic,
            "bold",
        ),
        styled(
            "Storage Types",
            &["storage.type", "storage.modifier"],
            MIKU_EXPO.y2026.sky_blue,
            "bold",
        ),
        rule(
            "Operators",
            &["keyword.operator", "punctuation.separator", "punctuation.terminator"],
            RACING_MIKU.y2019.neon_cyan,
        ),
        styled(
            "Special Operators",
            &["keyword.operator.new", "keyword.operator.expression"],
            MAGICAL_MIRAI.y2025.resonance_cyan,
            "bold",
        ),
        rule("Punctuation", &["punctuation"], FOREGROUNDS.primary),
        // Functions
        rule(
            "User Functions",
            &["entity.name.function", "meta.function-call"],
            TEALS.neon,
        ),
        rule(
            "Library/Support Functions",
            &["support.function", "support.function.console"],
            HOLOGRAM.purple,
        ),
        rule("Methods", &["entity.name.function.member"], TEALS.tint),
        // Classes and types
        styled(
            "User Classes",
            &["entity.name.type.class", "entity.name.class"],
            SNOW_MIKU.y2011.winter_blue,
            "bold",
        ),
        styled(
            "Structs",
            &["entity.name.type.struct"],
            PINKS.blush,
            "bold",
        ),
        rule(
            "Support/Library Classes",
            &["support.class", "support.type"],
            HOLOGRAM.purple,
        ),
        styled(
            "Interfaces",
            &["entity.name.type.interface"],
            CYANS.ice,
            "italic",
        ),
        rule(
            "Enums",
            &["entity.name.type.enum", "entity.name.enum"],
            MAGICAL_MIRAI.y2017.celebration_gold,
        ),
        rule(
            "Types / Primitives",
            &["entity.name.type", "support.type.primitive"],
            PROJECT_SEKAI.leo_need.ichika,
        ),
        styled(
            "Type Parameters",
            &["entity.name.type.parameter"],
            ACCENTS.gold,
            "italic",
        ),
        // Variables and properties
        rule(
            "Variables",
            &["variable", "meta.definition.variable.name"],
            FOREGROUNDS.primary,
        ),
        styled(
            "Language Variables",
            &["variable.language"],
            PINKS.hot,
            "italic",
        ),
        rule(
            "Properties / Fields",
            &[
                "variable.other.property",
                "variable.other.object.property",
                "variable.other.member",
            ],
            SNOW_MIKU.y2011.mittens,
        ),
        styled("Parameters", &["variable.parameter"], PINKS.soft, "italic"),
        styled(
            "Constants",
            &["variable.other.constant", "constant.language"],
            PINKS.soft,
            "bold",
        ),
        // Data and literals
        rule(
            "Strings",
            &["string", "string.quoted.double", "string.quoted.single"],
            SEMANTIC.success,
        ),
        rule(
            "Template Strings",
            &["string.template"],
            RACING_MIKU.y2014.lime_accent,
        ),
        rule("Numbers", &["constant.numeric"], ACCENTS.orange),
        styled(
            "Booleans",
            &["constant.language.boolean"],
            MAGICAL_MIRAI.y2014.vibrant_pink,
            "bold",
        ),
        rule("Regex", &["string.regexp"], SEMANTIC.error),
        rule(
            "Escape Sequences",
            &["constant.character.escape"],
            HOLOGRAM.purple,
        ),
        styled("Invalid", &["invalid.illegal"], SEMANTIC.error, "bold"),
        // Meta and decorators
        styled(
            "Decorators / Attributes",
            &["meta.decorator", "entity.other.attribute-name"],
            SNOW_MIKU.y2011.winter_blue,
            "italic",
        ),
        styled("HTML/JSX Tags", &["entity.name.tag"], TEALS.classic, "bold"),
        rule(
            "HTML/JSX Attributes",
            &["entity.other.attribute-name.html", "entity.other.attribute-name.jsx"],
            PROJECT_DIVA.space.cosmos_blue,
        ),
        // Markdown
        styled(
            "Markdown Headings",
            &["markup.heading", "entity.name.section.markdown"],
            MIKU_EXPO.y2026.neon_pink,
            "bold",
        ),
        styled("Markdown Bold", &["markup.bold"], ACCENTS.amber, "bold"),
        styled("Markdown Italic", &["markup.italic"], TEALS.tint, "italic"),
        rule(
            "Markdown Links",
            &["markup.underline.link", "string.other.link"],
            MIKU_EXPO.y2025.asia_cyan,
        ),
        rule(
            "Markdown Code",
            &["markup.inline.raw", "markup.raw.block"],
            SEMANTIC.success,
        ),
        styled("Markdown Quote", &["markup.quote"], GREYS.platinum, "italic"),
        // Haskell
        rule(
            "Haskell Type",
            &["entity.name.type.haskell", "storage.type.haskell"],
            PINKS.hot,
        ),
        rule(
            "Haskell Type Variable",
            &["entity.name.type.type-variable.haskell"],
            PROJECT_SEKAI.vivid_bad_squad.an,
        ),
        // Dart
        styled(
            "Dart Annotation",
            &["meta.declaration.annotation.dart"],
            MIKU_EXPO.y2026.sky_blue,
            "italic",
        ),
        // TOML / INI
        rule(
            "TOML Key",
            &["keyword.key.toml", "support.type.property-name.toml"],
            PROJECT_SEKAI.nightcord.kanade,
        ),
        rule(
            "TOML Table",
            &[
                "entity.other.attribute-name.table.toml",
                "support.type.property-name.table.toml",
            ],
            PROJECT_SEKAI.nightcord.kanade,
        ),
        rule(
            "INI Section Header",
            &["entity.name.section.group-title.ini", "punctuation.definition.entity.ini"],
            HOLOGRAM.purple,
        ),
        // Dockerfile
        styled(
            "Dockerfile Keyword",
            &["keyword.other.special-method.dockerfile"],
            HOLOGRAM.cyan,
            "bold",
        ),
        // GraphQL
        rule(
            "GraphQL Type",
            &["support.type.graphql", "entity.name.type.graphql"],
            MAGICAL_MIRAI.y2025.resonance_cyan,
        ),
        rule(
            "GraphQL Field",
            &["variable.graphql"],
            MAGICAL_MIRAI.y2025.harmony_pink,
        ),
        styled(
            "GraphQL Directive",
            &["entity.name.function.directive.graphql"],
            MAGICAL_MIRAI.y2025.connection_purple,
            "italic",
        ),
        // Lua
        styled(
            "Lua Self",
            &["variable.language.self.lua"],
            MIKU_NT.ui.nt_cyan,
            "italic",
        ),
        // Zig
        rule(
            "Zig Builtin",
            &["variable.other.member.zig", "support.function.zig"],
            RACING_MIKU.y2019.neon_cyan,
        ),
        // Terraform
        rule(
            "Terraform Resource Type",
            &["entity.name.type.terraform", "entity.name.label.terraform"],
            SEMANTIC.success,
        ),
        // Protobuf
        rule(
            "Protobuf Message",
            &["entity.name.class.message.protobuf"],
            PROJECT_SEKAI.units.more_more_jump,
        ),
        rule(
            "Protobuf Field",
            &["entity.name.variable.field.protobuf"],
            PROJECT_SEKAI.more_more_jump.minori,
        ),
        // LaTeX
        styled(
            "LaTeX Command",
            &["support.function.latex", "support.function.general.tex", "keyword.control.tex"],
            TEALS.classic,
            "bold",
        ),
        styled(
            "LaTeX Section",
            &["entity.name.section.latex", "support.function.section.latex"],
            PINKS.hot,
            "bold",
        ),
        rule(
            "LaTeX Environment",
            &["variable.parameter.function.latex", "entity.name.function.environment.latex"],
            ACCENTS.amber,
        ),
        rule(
            "LaTeX Math",
            &["support.class.math.latex", "string.other.math.latex", "constant.other.math.latex"],
            CYANS.electric,
        ),
        rule(
            "LaTeX Reference",
            &[
                "constant.other.reference.citation.latex",
                "constant.other.reference.label.latex",
            ],
            HOLOGRAM.purple,
        ),
        // R
        rule(
            "R Function",
            &["entity.name.function.r", "support.function.r"],
            VERSION_MAPPING.functions,
        ),
        rule(
            "R Variable Assignment",
            &["keyword.operator.assignment.r", "keyword.other.r"],
            TEALS.classic,
        ),
        styled("R Parameter", &["variable.parameter.r"], PINKS.soft, "italic"),
        rule(
            "R Package Namespace",
            &["entity.namespace.r", "entity.name.namespace.r"],
            ACCENTS.amber,
        ),
        rule("R Special Variable", &["variable.language.r"], HOLOGRAM.cyan),
        // Vue
        styled(
            "Vue Directive",
            &[
                "entity.other.attribute-name.directive.vue",
                "keyword.control.conditional.vue",
                "keyword.control.loop.vue",
            ],
            PROJECT_SEKAI.leo_need.ichika,
            "bold",
        ),
        rule(
            "Vue Component Tag",
            &["entity.name.tag.component.vue", "support.class.component.vue"],
            PROJECT_SEKAI.leo_need.ichika,
        ),
        rule(
            "Vue Interpolation",
            &["punctuation.definition.block.tag.vue", "meta.interpolation.vue"],
            PROJECT_SEKAI.leo_need.saki,
        ),
        // Svelte
        styled(
            "Svelte Directive",
            &[
                "entity.other.attribute-name.directive.svelte",
                "keyword.control.svelte",
                "keyword.control.conditional.svelte",
                "keyword.control.loop.svelte",
            ],
            PROJECT_SEKAI.wonderlands_showtime.emu,
            "bold",
        ),
        rule(
            "Svelte Component Tag",
            &["support.class.component.svelte", "entity.name.tag.svelte"],
            PROJECT_SEKAI.wonderlands_showtime.nene,
        ),
        rule(
            "Svelte Block",
            &[
                "punctuation.definition.block.begin.svelte",
                "punctuation.definition.block.end.svelte",
            ],
            PROJECT_SEKAI.wonderlands_showtime.tsukasa,
        ),
        // Astro
        rule(
            "Astro Component",
            &["support.class.component.astro", "entity.name.tag.astro"],
            MIKU_EXPO.y2025.asia_cyan,
        ),
        rule(
            "Astro Frontmatter",
            &["punctuation.definition.block.astro"],
            HOLOGRAM.purple,
        ),
        // C#
        styled("C# LINQ Keywords", &["keyword.query.linq.cs"], TEALS.classic, "bold"),
        styled(
            "C# Async Pattern",
            &["keyword.other.await.cs", "keyword.other.async.cs"],
            TEALS.neon,
            "bold",
        ),
        styled(
            "C# Attribute",
            &["meta.attribute.cs", "entity.name.type.attribute.cs"],
            ACCENTS.amber,
            "italic",
        ),
        rule(
            "C# Namespace",
            &["entity.name.type.namespace.cs"],
            SNOW_MIKU.y2011.winter_blue,
        ),
        // Swift
        styled(
            "Swift Attribute",
            &["meta.attribute.swift", "storage.modifier.attribute.swift"],
            ACCENTS.amber,
            "italic",
        ),
        rule(
            "Swift Type",
            &["support.type.swift", "entity.name.type.swift"],
            PROJECT_SEKAI.units.more_more_jump,
        ),
        styled("Swift Self", &["variable.language.swift"], PINKS.soft, "italic"),
        // Scala
        rule(
            "Scala Type",
            &["entity.name.class.scala", "entity.name.type.scala"],
            SNOW_MIKU.y2011.winter_blue,
        ),
        styled("Scala Annotation", &["meta.annotation.scala"], ACCENTS.amber, "italic"),
        rule("Scala Symbol", &["constant.other.symbol.scala"], HOLOGRAM.purple),
        // PowerShell
        rule(
            "PowerShell Cmdlet",
            &["support.function.powershell", "entity.name.function.powershell"],
            MIKU_NT.ui.nt_cyan,
        ),
        rule(
            "PowerShell Variable",
            &[
                "variable.other.readwrite.powershell",
                "punctuation.definition.variable.powershell",
            ],
            HOLOGRAM.cyan,
        ),
        styled(
            "PowerShell Operator",
            &[
                "keyword.operator.comparison.powershell",
                "keyword.operator.logical.powershell",
            ],
            TEALS.classic,
            "bold",
        ),
        styled(
            "PowerShell Attribute",
            &["support.function.attribute.powershell", "entity.other.attribute.powershell"],
            ACCENTS.amber,
            "italic",
        ),
        rule(
            "PowerShell Type",
            &["storage.type.powershell"],
            SNOW_MIKU.y2011.winter_blue,
        ),
        // Objective-C
        rule(
            "Objective-C Method",
            &["entity.name.function.objc", "meta.function-call.objc"],
            VERSION_MAPPING.functions,
        ),
        styled(
            "Objective-C Property",
            &["meta.property-with-attributes.objc", "keyword.other.property.attribute.objc"],
            ACCENTS.amber,
            "italic",
        ),
        rule(
            "Objective-C Protocol",
            &["entity.name.type.protocol.objc", "meta.protocol-list.objc"],
            SNOW_MIKU.y2021.glow_cyan,
        ),
        rule(
            "Objective-C Category",
            &["entity.name.type.category.objc"],
            SNOW_MIKU.y2011.winter_blue,
        ),
        // Clojure
        rule("Clojure Keyword", &["constant.keyword.clojure"], HOLOGRAM.purple),
        rule("Clojure Symbol", &["meta.symbol.clojure"], FOREGROUNDS.primary),
        rule(
            "Clojure Function Definition",
            &["entity.name.function.clojure"],
            HOLOGRAM.cyan,
        ),
        styled(
            "Clojure Macro",
            &["entity.name.function.macro.clojure"],
            ACCENTS.amber,
            "bold",
        ),
        rule(
            "Clojure Namespace",
            &["entity.name.namespace.clojure"],
            TEALS.classic,
        ),
        // F#
        styled(
            "F# Keyword",
            &["keyword.fsharp", "keyword.other.fsharp"],
            TEALS.classic,
            "bold",
        ),
        rule("F# Function", &["entity.name.function.fsharp"], VERSION_MAPPING.functions),
        rule(
            "F# Type",
            &["entity.name.type.fsharp", "support.type.fsharp"],
            VERSION_MAPPING.types,
        ),
        rule("F# Module", &["entity.name.section.fsharp"], TEALS.classic),
        rule(
            "F# Computation Expression",
            &["keyword.other.computation-expression.fsharp"],
            HOLOGRAM.purple,
        ),
        styled(
            "F# Attribute",
            &["support.function.attribute.fsharp"],
            ACCENTS.amber,
            "italic",
        ),
        // Handlebars / EJS / Pug
        rule(
            "Handlebars Expression",
            &["meta.tag.template.expression.handlebars", "support.constant.handlebars"],
            TEALS.classic,
        ),
        rule(
            "Handlebars Helper",
            &["entity.name.function.handlebars", "support.function.builtin.handlebars"],
            VERSION_MAPPING.functions,
        ),
        rule(
            "Handlebars Variable",
            &["variable.parameter.handlebars"],
            HOLOGRAM.cyan,
        ),
        styled(
            "Handlebars Block",
            &["keyword.control.handlebars", "keyword.other.handlebars"],
            TEALS.classic,
            "bold",
        ),
        rule(
            "EJS Delimiter",
            &["punctuation.section.embedded.ejs", "entity.tag.tagbraces.ejs"],
            TEALS.classic,
        ),
        styled("EJS Control", &["keyword.control.ejs"], TEALS.classic, "bold"),
        styled(
            "Pug Tag",
            &["entity.name.tag.pug", "entity.name.tag.jade"],
            TEALS.classic,
            "bold",
        ),
        rule(
            "Pug Class",
            &[
                "entity.other.attribute-name.class.pug",
                "entity.other.attribute-name.class.jade",
            ],
            TEALS.classic,
        ),
        rule(
            "Pug ID",
            &["entity.other.attribute-name.id.pug", "entity.other.attribute-name.id.jade"],
            PINKS.accessory,
        ),
        rule(
            "Pug Interpolation",
            &["meta.embedded.line.pug", "meta.embedded.line.jade"],
            HOLOGRAM.cyan,
        ),
        // YAML extras
        rule(
            "YAML Key",
            &["entity.name.tag.yaml", "support.type.property-name.yaml"],
            TEALS.classic,
        ),
        rule(
            "YAML Anchor",
            &["entity.name.type.anchor.yaml", "punctuation.definition.anchor.yaml"],
            HOLOGRAM.purple,
        ),
        rule(
            "YAML Alias",
            &["variable.other.alias.yaml", "punctuation.definition.alias.yaml"],
            HOLOGRAM.purple,
        ),
        rule("YAML Timestamp", &["constant.other.timestamp.yaml"], ACCENTS.amber),
        rule(
            "YAML Directive",
            &["keyword.other.directive.yaml", "punctuation.definition.directive.yaml"],
            HOLOGRAM.purple,
        ),
        // Additional string variants
        rule(
            "String Quoted Variants",
            &[
                "string.quoted.double",
                "string.quoted.single",
                "string.quoted.triple",
                "string.quoted.other",
                "string.template",
                "string.interpolated",
            ],
            SEMANTIC.success,
        ),
        rule(
            "Shell Interpolated Strings",
            &["string.interpolated.shell", "string.interpolated.dollar.shell"],
            SEMANTIC.success,
        ),
        // Meta scopes
        rule(
            "Meta Function Parameters",
            &["meta.function.parameters", "meta.parameters", "meta.function-call.arguments"],
            FOREGROUNDS.primary,
        ),
        rule(
            "Meta Class Body",
            &["meta.class.body", "meta.class.inheritance"],
            FOREGROUNDS.primary,
        ),
        rule(
            "Meta Interface/Namespace Body",
            &["meta.interface.body", "meta.namespace.body"],
            FOREGROUNDS.primary,
        ),
        rule(
            "Meta Object/Array Literals",
            &["meta.object-literal", "meta.array.literal", "meta.objectliteral"],
            FOREGROUNDS.primary,
        ),
        rule(
            "Meta Imports/Exports",
            &["meta.import", "meta.export", "meta.imports"],
            FOREGROUNDS.primary,
        ),
        rule(
            "Meta Function Return Type",
            &["meta.return.type", "meta.function.return-type"],
            VERSION_MAPPING.types,
        ),
        // Entity name variants
        rule(
            "Entity Name Label",
            &["entity.name.label", "entity.name.statement.label"],
            ACCENTS.amber,
        ),
        rule(
            "Entity Name Constant",
            &["entity.name.constant", "entity.name.variable.constant"],
            PINKS.accessory,
        ),
        rule(
            "Entity Name Enum",
            &["entity.name.type.enum", "entity.name.enum"],
            VERSION_MAPPING.types,
        ),
        rule(
            "Entity Name Interface",
            &["entity.name.type.interface", "entity.name.interface"],
            VERSION_MAPPING.types,
        ),
        rule(
            "Entity Name Namespace",
            &["entity.name.type.namespace", "entity.name.namespace"],
            ACCENTS.blue,
        ),
        rule(
            "Entity Name Alias/Type Alias",
            &["entity.name.type.alias", "entity.name.type.type-alias"],
            VERSION_MAPPING.types,
        ),
        // Keyword declaration variants
        styled(
            "Keyword Declaration",
            &[
                "keyword.declaration",
                "keyword.declaration.function",
                "keyword.declaration.class",
                "keyword.declaration.type",
            ],
            TEALS.classic,
            "bold",
        ),
        styled(
            "Keyword Namespace/Import",
            &["keyword.namespace", "keyword.import", "keyword.export"],
            TEALS.classic,
            "bold",
        ),
        styled(
            "Keyword Type",
            &["keyword.type", "keyword.other.type"],
            TEALS.classic,
            "bold",
        ),
        // Support variants
        rule(
            "Support Variable",
            &["support.variable", "support.variable.property"],
            TEALS.classic,
        ),
        rule(
            "Support Module",
            &["support.module", "support.module.node"],
            TEALS.classic,
        ),
        // Markup extras
        style_only("Markup Underline", &["markup.underline"], "underline"),
        rule(
            "Markup Link Label",
            &["markup.link.label", "string.other.link.title.markdown"],
            HOLOGRAM.cyan,
        ),
        styled(
            "Markup Link URL",
            &["markup.underline.link.markdown", "meta.link.inline.markdown"],
            HOLOGRAM.cyan,
            "underline",
        ),
        rule(
            "Markup List Numbered",
            &["markup.list.numbered", "punctuation.definition.list.begin.markdown"],
            HOLOGRAM.cyan,
        ),
        styled(
            "Deprecated Entities",
            &[
                "entity.deprecated",
                "entity.name.deprecated",
                "entity.name.function.deprecated",
                "entity.name.type.deprecated",
                "invalid.deprecated",
            ],
            GREYS.platinum,
            "strikethrough",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn last_rule_for<'a>(rules: &'a [TokenColorRule], scope: &str) -> Option<&'a TokenColorRule> {
        rules
            .iter()
            .filter(|r| r.scope.iter().any(|s| s == scope))
            .last()
    }

    #[test]
    fn comments_are_platinum_italic() {
        let rules = token_colors();
        let comments = last_rule_for(&rules, "comment").unwrap();
        assert_eq!(comments.settings.foreground.as_deref(), Some("#B0BEC5"));
        assert_eq!(comments.settings.font_style.as_deref(), Some("italic"));
    }

    #[test]
    fn last_interface_rule_wins() {
        let rules = token_colors();
        let interface = last_rule_for(&rules, "entity.name.type.interface").unwrap();
        assert_eq!(interface.name, "Entity Name Interface");
        assert_eq!(interface.settings.foreground.as_deref(), Some("#B2EBE7"));
    }

    #[test]
    fn every_audited_core_scope_has_a_rule() {
        let rules = token_colors();
        let scopes = [
            "variable",
            "variable.language",
            "variable.parameter",
            "variable.other.property",
            "keyword.operator",
            "storage.type",
            "storage.modifier",
            "entity.name.function",
            "entity.name.class",
            "entity.name.type",
            "entity.name.type.interface",
            "entity.name.namespace",
            "entity.name.type.enum",
            "entity.name.type.parameter",
            "constant.numeric",
            "string",
            "constant.character.escape",
            "constant.language",
            "string.regexp",
            "entity.name.tag",
            "entity.other.attribute-name",
            "markup.underline.link",
            "punctuation",
            "entity.name.type.struct",
            "invalid.illegal",
            "invalid.deprecated",
            "support.function",
            "markup.heading",
            "markup.bold",
            "markup.italic",
            "markup.inline.raw",
            "markup.quote",
            "comment",
            "comment.block.documentation",
        ];
        for scope in scopes {
            assert!(
                last_rule_for(&rules, scope).is_some(),
                "no rule covers scope {scope}"
            );
        }
    }

    #[test]
    fn style_only_rules_omit_foreground() {
        let rules = token_colors();
        let underline = rules.iter().find(|r| r.name == "Markup Underline").unwrap();
        assert!(underline.settings.foreground.is_none());
        let json = serde_json::to_string(&underline.settings).unwrap();
        assert_eq!(json, "{\"fontStyle\":\"underline\"}");
    }
}
