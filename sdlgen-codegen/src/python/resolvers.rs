//! Resolver scaffolding generation for the `resolvers` module.
//!
//! Each enum and object definition becomes an Ariadne binding. Object fields
//! that take arguments get a stub resolver function; argument-free fields
//! are left to Ariadne's default name-matching resolver.

use crate::error::CodegenError;
use crate::known::KnownTypes;
use crate::python::EMPTY_BODY;
use crate::python::naming::camel_to_snake;
use crate::python::resolve::resolve;
use crate::python::symbolic::{CodeBlock, SymbolicType};
use sdlgen_schema::{
    Definition, EnumTypeDef, FieldDef, InputValueDef, ObjectTypeDef, SchemaDocument, Value,
};

/// Module receiving the generated resolvers.
pub const MODULE: &str = ".resolvers";

/// Module providing the binding types.
pub const FRAMEWORK_MODULE: &str = "ariadne";

/// Name of the registry list.
pub const REGISTRY_NAME: &str = "resolvers";

/// Binding flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverKind {
    /// Regular object type bound to its record.
    Object,
    /// Enum type bound to its Python enum.
    Enum,
    /// Root query type.
    Query,
    /// Root mutation type.
    Mutation,
}

impl ResolverKind {
    /// Picks the flavour for an object type name.
    #[must_use]
    pub fn for_object(name: &str) -> Self {
        match name {
            "Query" => Self::Query,
            "Mutation" => Self::Mutation,
            _ => Self::Object,
        }
    }

    /// Returns the Ariadne binding class.
    #[must_use]
    pub const fn binding_type(&self) -> &'static str {
        match self {
            Self::Object => "ObjectType",
            Self::Enum => "EnumType",
            Self::Query => "QueryType",
            Self::Mutation => "MutationType",
        }
    }

    /// Returns true for root operation flavours.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        matches!(self, Self::Query | Self::Mutation)
    }

    fn used_type(self) -> SymbolicType {
        SymbolicType::imported(self.binding_type(), FRAMEWORK_MODULE)
    }
}

/// Rendered default of a resolver argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultValue {
    /// Python expression.
    pub expression: String,
    /// Type the expression belongs to.
    pub ty: SymbolicType,
}

impl DefaultValue {
    /// Renders a literal default for an argument of type `ty`.
    ///
    /// Only enum literals are supported.
    ///
    /// # Errors
    /// Returns `CodegenError::UnsupportedDefault` for any other literal.
    pub fn from_literal(
        argument: &str,
        value: &Value,
        ty: &SymbolicType,
    ) -> Result<Self, CodegenError> {
        match (value, ty) {
            (Value::Enum(name), SymbolicType::Bare { .. }) => Ok(Self {
                expression: format!("{}.{}", ty.name(), name),
                ty: ty.clone(),
            }),
            (Value::Enum(_), _) => Err(CodegenError::UnsupportedDefault {
                argument: argument.to_string(),
                kind: format!("enum (for {})", ty.name()),
            }),
            (other, _) => Err(CodegenError::UnsupportedDefault {
                argument: argument.to_string(),
                kind: other.kind().to_string(),
            }),
        }
    }
}

/// Parameter of a resolver function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverArgument {
    /// Argument name in the schema.
    pub schema_name: String,
    /// Parameter type.
    pub ty: SymbolicType,
    /// Default, if the schema declares one.
    pub default: Option<DefaultValue>,
}

impl ResolverArgument {
    /// Builds an argument from its schema definition.
    ///
    /// A declared default makes the parameter use the non-optional type.
    ///
    /// # Errors
    /// Returns `CodegenError` if the type cannot be resolved or the default
    /// cannot be rendered.
    pub fn from_definition(
        argument: &InputValueDef,
        known: &KnownTypes,
    ) -> Result<Self, CodegenError> {
        let ty = resolve(&argument.ty, known)?;
        let Some(value) = &argument.default_value else {
            return Ok(Self {
                schema_name: argument.name.clone(),
                ty,
                default: None,
            });
        };

        let ty = ty.into_required().unwrap_or_else(|ty| ty);
        let default = DefaultValue::from_literal(&argument.name, value, &ty)?;
        Ok(Self {
            schema_name: argument.name.clone(),
            ty,
            default: Some(default),
        })
    }

    /// Returns the Python parameter name.
    #[must_use]
    pub fn name(&self) -> String {
        camel_to_snake(&self.schema_name)
    }

    /// Renders `name: Type[ = default]`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = format!("{}: {}", self.name(), self.ty.render(MODULE));
        if let Some(default) = &self.default {
            output.push_str(&format!(" = {}", default.expression));
        }
        output
    }
}

/// Stub resolver for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverFunction {
    /// Field name in the schema.
    pub schema_name: String,
    /// Return type.
    pub return_type: SymbolicType,
    /// Field arguments.
    pub arguments: Vec<ResolverArgument>,
}

impl ResolverFunction {
    /// Builds a resolver function from a field definition.
    ///
    /// # Errors
    /// Returns `CodegenError` if a type cannot be resolved or a default
    /// cannot be rendered.
    pub fn from_field(field: &FieldDef, known: &KnownTypes) -> Result<Self, CodegenError> {
        Ok(Self {
            schema_name: field.name.clone(),
            return_type: resolve(&field.ty, known)?,
            arguments: field
                .arguments
                .iter()
                .map(|argument| ResolverArgument::from_definition(argument, known))
                .collect::<Result<_, _>>()?,
        })
    }

    /// Returns the Python name of the field.
    #[must_use]
    pub fn name(&self) -> String {
        camel_to_snake(&self.schema_name)
    }

    /// Returns the types referenced by the signature.
    pub fn used_types(&self) -> impl Iterator<Item = SymbolicType> + '_ {
        std::iter::once(SymbolicType::imported("GraphQLResolveInfo", "graphql"))
            .chain(self.arguments.iter().map(|argument| argument.ty.clone()))
            .chain(std::iter::once(self.return_type.clone()))
    }

    /// Renders the function for the binding it is registered on.
    ///
    /// The first parameter is the parent record, or `_: None` for root
    /// types; the second is always the resolve info.
    #[must_use]
    pub fn render(&self, resolver: &ObjectResolver) -> String {
        let resolver_name = resolver.name();
        let first = match &resolver.parent {
            Some(parent) => format!("{}_: {}", resolver_name, parent.render(MODULE)),
            None => "_: None".to_string(),
        };

        let mut parameters = vec![first, "info: GraphQLResolveInfo".to_string()];
        parameters.extend(self.arguments.iter().map(ResolverArgument::render));

        format!(
            "def resolve_{}_{}({}) -> {}:\n{}",
            resolver_name,
            self.name(),
            parameters.join(", "),
            self.return_type.render(MODULE),
            EMPTY_BODY
        )
    }
}

/// Binding of an object or root type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectResolver {
    /// Type name in the schema.
    pub schema_name: String,
    /// Binding flavour.
    pub kind: ResolverKind,
    /// Record type the resolvers receive; `None` for root types.
    pub parent: Option<SymbolicType>,
    /// Stub resolvers.
    pub functions: Vec<ResolverFunction>,
}

impl ObjectResolver {
    /// Builds the binding of an object type.
    ///
    /// # Errors
    /// Returns `CodegenError` if the record type of a non-root object is not
    /// known or a field cannot be resolved.
    pub fn from_definition(object: &ObjectTypeDef, known: &KnownTypes) -> Result<Self, CodegenError> {
        let kind = ResolverKind::for_object(&object.name);
        let parent = if kind.is_root() {
            None
        } else {
            let module = known
                .module_of(&object.name)
                .ok_or_else(|| CodegenError::unresolved(&object.name))?;
            Some(SymbolicType::imported(&object.name, module))
        };

        let functions = object
            .fields
            .iter()
            .filter(|field| field.has_arguments())
            .map(|field| ResolverFunction::from_field(field, known))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            schema_name: object.name.clone(),
            kind,
            parent,
            functions,
        })
    }

    /// Returns the Python binding name.
    #[must_use]
    pub fn name(&self) -> String {
        camel_to_snake(&self.schema_name)
    }

    fn body(&self) -> String {
        let name = self.name();
        let mut output = if self.parent.is_some() {
            format!(
                "{} = {}(\"{}\")",
                name,
                self.kind.binding_type(),
                self.schema_name
            )
        } else {
            format!("{} = {}()", name, self.kind.binding_type())
        };

        for function in &self.functions {
            output.push_str(&format!("\n@{}.field(\"{}\")\n", name, function.schema_name));
            output.push_str(&function.render(self));
        }
        output
    }

    fn used_types(&self) -> Vec<SymbolicType> {
        let mut used_types = vec![self.kind.used_type()];
        used_types.extend(self.parent.iter().cloned());
        used_types.extend(self.functions.iter().flat_map(ResolverFunction::used_types));
        used_types
    }
}

/// Binding of an enum type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumResolver {
    /// Enum name in the schema.
    pub schema_name: String,
    /// Python enum the values come from.
    pub target: SymbolicType,
}

impl EnumResolver {
    /// Builds the binding of an enum type.
    ///
    /// # Errors
    /// Returns `CodegenError::UnresolvedType` if the enum has no known module.
    pub fn from_definition(enum_def: &EnumTypeDef, known: &KnownTypes) -> Result<Self, CodegenError> {
        let module = known
            .module_of(&enum_def.name)
            .ok_or_else(|| CodegenError::unresolved(&enum_def.name))?;
        Ok(Self {
            schema_name: enum_def.name.clone(),
            target: SymbolicType::imported(&enum_def.name, module),
        })
    }

    /// Returns the Python binding name.
    #[must_use]
    pub fn name(&self) -> String {
        camel_to_snake(&self.schema_name)
    }

    fn body(&self) -> String {
        format!(
            "{} = {}(\"{}\", values={})",
            self.name(),
            ResolverKind::Enum.binding_type(),
            self.schema_name,
            self.target.name()
        )
    }
}

/// Any generated binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolver {
    /// Object or root type binding.
    Object(ObjectResolver),
    /// Enum binding.
    Enum(EnumResolver),
}

impl Resolver {
    /// Returns the Python binding name.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Object(object) => object.name(),
            Self::Enum(enum_resolver) => enum_resolver.name(),
        }
    }

    /// Converts the binding into an emittable block.
    #[must_use]
    pub fn to_code_block(&self) -> CodeBlock {
        match self {
            Self::Object(object) => CodeBlock::new(object.body(), object.used_types()),
            Self::Enum(enum_resolver) => CodeBlock::new(
                enum_resolver.body(),
                vec![
                    ResolverKind::Enum.used_type(),
                    enum_resolver.target.clone(),
                ],
            ),
        }
    }
}

/// Generator for Ariadne bindings and resolver stubs.
pub struct ResolverGenerator<'a> {
    document: &'a SchemaDocument,
    known: &'a KnownTypes,
}

impl<'a> ResolverGenerator<'a> {
    /// Creates a new resolver generator.
    ///
    /// `known` must already map every enum and non-root object to the module
    /// declaring it.
    #[must_use]
    pub fn new(document: &'a SchemaDocument, known: &'a KnownTypes) -> Self {
        Self { document, known }
    }

    /// Builds the binding of every supported definition, in definition order.
    ///
    /// # Errors
    /// Returns `CodegenError` if a type cannot be resolved or an argument
    /// default cannot be rendered.
    pub fn resolvers(&self) -> Result<Vec<Resolver>, CodegenError> {
        let mut resolvers = Vec::new();
        for definition in &self.document.definitions {
            let resolver = match definition {
                Definition::Object(object) => {
                    Resolver::Object(ObjectResolver::from_definition(object, self.known)?)
                }
                Definition::Enum(enum_def) => {
                    Resolver::Enum(EnumResolver::from_definition(enum_def, self.known)?)
                }
                Definition::Schema(_) | Definition::Directive(_) => continue,
                Definition::Interface(_)
                | Definition::InputObject(_)
                | Definition::Union(_)
                | Definition::Scalar(_) => {
                    tracing::debug!(
                        kind = definition.kind(),
                        name = ?definition.name(),
                        "resolver generation not implemented, skipping"
                    );
                    continue;
                }
            };
            resolvers.push(resolver);
        }
        Ok(resolvers)
    }

    /// Generates one block per binding plus the registry block.
    ///
    /// # Errors
    /// Returns `CodegenError` if a type cannot be resolved or an argument
    /// default cannot be rendered.
    pub fn generate(&self) -> Result<Vec<CodeBlock>, CodegenError> {
        let resolvers = self.resolvers()?;
        if resolvers.is_empty() {
            return Ok(Vec::new());
        }

        let mut blocks: Vec<_> = resolvers.iter().map(Resolver::to_code_block).collect();
        let names: Vec<_> = resolvers.iter().map(Resolver::name).collect();
        blocks.push(CodeBlock::new(
            format!("{} = [{}]", REGISTRY_NAME, names.join(", ")),
            Vec::new(),
        ));
        Ok(blocks)
    }
}
