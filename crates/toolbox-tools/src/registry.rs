use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use toolbox_core::{Category, ExecutionResult, Tool, ToolCall, ToolDescriptor, ToolError, ToolSlug};

/// Trait for routing tool calls to their implementations.
pub trait ToolRegistry {
    /// Dispatch a tool call to the tool registered under its slug.
    ///
    /// Returns `None` if no tool is registered under that slug.
    fn dispatch(&self, call: ToolCall) -> Option<ExecutionResult>;

    /// Dispatch without taking ownership of the call.
    fn dispatch_ref(&self, call: &ToolCall) -> Option<ExecutionResult> {
        self.dispatch(call.clone())
    }

    /// Dispatch, turning an unknown slug into [`ToolError::NotFound`].
    fn try_dispatch(&self, call: &ToolCall) -> Result<ExecutionResult, ToolError> {
        self.dispatch_ref(call)
            .ok_or_else(|| ToolError::not_found(call.slug.clone()))
    }
}

/// Errors raised while building a registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Tool slug '{0}' is already registered")]
    DuplicateSlug(ToolSlug),

    #[error("Descriptor slug '{descriptor}' does not match tool name '{tool}'")]
    NameMismatch { descriptor: ToolSlug, tool: String },
}

#[derive(Clone)]
struct Entry {
    descriptor: ToolDescriptor,
    tool: Arc<dyn Tool>,
}

/// Registry holding each tool next to its catalog descriptor.
///
/// Tools keep their registration order, which is the order the home page
/// lists them in within a category.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use toolbox_core::{Category, ExecutionResult, Tool, ToolCall, ToolDescriptor, ToolSlug};
/// use toolbox_tools::{InMemoryToolRegistry, ToolRegistry};
///
/// struct ShoutTool;
///
/// impl Tool for ShoutTool {
///     fn name(&self) -> &str { "shout" }
///     fn call(&self, input: String) -> ExecutionResult {
///         ExecutionResult::success(input.to_uppercase())
///     }
/// }
///
/// let descriptor = ToolDescriptor {
///     slug: ToolSlug::parse("shout").unwrap(),
///     name: "Shout",
///     description: "Uppercases text",
///     long_description: None,
///     keywords: &["uppercase"],
///     category: Category::TextUtilities,
///     icon: "Megaphone",
/// };
///
/// let registry = InMemoryToolRegistry::new()
///     .try_with_tool(descriptor, Arc::new(ShoutTool))
///     .unwrap();
///
/// let result = registry.dispatch(ToolCall::new("shout", "hey").unwrap());
/// assert_eq!(result.unwrap().output(), "HEY");
/// ```
#[derive(Clone, Default)]
pub struct InMemoryToolRegistry {
    entries: Vec<Entry>,
    index: HashMap<ToolSlug, usize>,
}

impl fmt::Debug for InMemoryToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryToolRegistry")
            .field("tools", &self.index.len())
            .finish()
    }
}

impl InMemoryToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its descriptor's slug.
    ///
    /// The tool's own [`Tool::name`] must equal the slug, and the slug must
    /// not be taken.
    pub fn register(
        &mut self,
        descriptor: ToolDescriptor,
        tool: Arc<dyn Tool>,
    ) -> Result<(), RegistryError> {
        if tool.name() != descriptor.slug.as_str() {
            return Err(RegistryError::NameMismatch {
                descriptor: descriptor.slug,
                tool: tool.name().to_string(),
            });
        }
        if self.index.contains_key(&descriptor.slug) {
            return Err(RegistryError::DuplicateSlug(descriptor.slug));
        }
        self.index.insert(descriptor.slug.clone(), self.entries.len());
        self.entries.push(Entry { descriptor, tool });
        Ok(())
    }

    /// Builder form of [`InMemoryToolRegistry::register`].
    pub fn try_with_tool(
        mut self,
        descriptor: ToolDescriptor,
        tool: Arc<dyn Tool>,
    ) -> Result<Self, RegistryError> {
        self.register(descriptor, tool)?;
        Ok(self)
    }

    fn entry(&self, slug: &str) -> Option<&Entry> {
        let slug = ToolSlug::parse(slug).ok()?;
        self.index.get(&slug).map(|&i| &self.entries[i])
    }

    /// Implementation registered under `slug`.
    pub fn get_tool(&self, slug: &str) -> Option<Arc<dyn Tool>> {
        self.entry(slug).map(|entry| Arc::clone(&entry.tool))
    }

    /// Descriptor registered under `slug`. Malformed slugs are simply absent.
    pub fn get_tool_by_slug(&self, slug: &str) -> Option<&ToolDescriptor> {
        self.entry(slug).map(|entry| &entry.descriptor)
    }

    /// All descriptors in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.entries.iter().map(|entry| &entry.descriptor)
    }

    /// Descriptors grouped by category. Categories iterate alphabetically by
    /// label; tools keep registration order.
    pub fn tools_by_category(&self) -> BTreeMap<Category, Vec<&ToolDescriptor>> {
        let mut groups: BTreeMap<Category, Vec<&ToolDescriptor>> = BTreeMap::new();
        for descriptor in self.descriptors() {
            groups.entry(descriptor.category).or_default().push(descriptor);
        }
        groups
    }

    /// Case-insensitive substring search over names, descriptions and
    /// keywords. A blank query returns every tool.
    pub fn search(&self, query: &str) -> Vec<&ToolDescriptor> {
        let needle = query.trim().to_lowercase();
        self.descriptors().filter(|d| d.matches(&needle)).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ToolRegistry for InMemoryToolRegistry {
    fn dispatch(&self, call: ToolCall) -> Option<ExecutionResult> {
        self.dispatch_ref(&call)
    }

    fn dispatch_ref(&self, call: &ToolCall) -> Option<ExecutionResult> {
        let entry = &self.entries[*self.index.get(&call.slug)?];
        tracing::debug!(tool = %call.slug, input_len = call.input.len(), "Dispatching tool call");
        let result = entry.tool.call(call.input.clone());
        if let Some(reason) = result.failure_reason() {
            tracing::debug!(tool = %call.slug, reason = %reason, "Tool call failed");
        }
        Some(result)
    }
}
