use super::{FieldDescriptor, ModelMeta, ModelRef, TableMeta, TableOptions, warn_replaced};
use crate::surql_trace_registry;
use crate::traits::Model;
use compact_str::CompactString;
use hashbrown::HashMap;
use std::any::TypeId;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Model metadata keyed by type.
///
/// Entries are written once, on first use of a model, and read afterwards.
/// Explicit `register_*` calls create an entry without running the model's
/// declaration, so they take precedence over [`Model::describe`].
#[derive(Debug, Default)]
pub struct Registry {
    models: RwLock<HashMap<TypeId, Arc<ModelMeta>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry used by model operations
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Metadata for `M`, declaring it on first access
    pub fn meta<M: Model>(&self) -> Arc<ModelMeta> {
        self.ensure(ModelRef::of::<M>())
    }

    /// Metadata for `model`, declaring it on first access
    pub fn ensure(&self, model: ModelRef) -> Arc<ModelMeta> {
        if let Some(meta) = self.read(model) {
            return meta;
        }

        // Declarations only build descriptors, so run them outside the lock.
        let built = Arc::new(model.build());
        let mut models = self.models.write().unwrap_or_else(PoisonError::into_inner);
        let meta = models.entry(model.type_id()).or_insert_with(|| {
            surql_trace_registry!("describe", built.table_name(), built.fields().count());
            built
        });
        Arc::clone(meta)
    }

    pub fn register_table(&self, model: ModelRef, options: TableOptions) {
        self.update(model, |meta| meta.set_table(options));
    }

    /// Register a field, replacing an earlier declaration of the same property.
    pub fn register_field(&self, model: ModelRef, field: FieldDescriptor) {
        self.update(model, |meta| {
            let name = field.name.clone();
            if meta.set_field(field) {
                warn_replaced(meta.table_name(), &name);
            }
        });
    }

    pub fn register_identity(&self, model: ModelRef, property: impl Into<CompactString>) {
        self.update(model, |meta| meta.set_identity(property));
    }

    /// Declared fields followed by the identity field
    pub fn fields(&self, model: ModelRef) -> Option<Vec<FieldDescriptor>> {
        self.read(model)
            .map(|meta| meta.fields().cloned().collect())
    }

    pub fn field(&self, model: ModelRef, name: &str) -> Option<FieldDescriptor> {
        self.read(model)?.field(name).cloned()
    }

    pub fn table(&self, model: ModelRef) -> Option<TableMeta> {
        self.read(model).map(|meta| meta.table().clone())
    }

    pub fn contains(&self, model: ModelRef) -> bool {
        self.read(model).is_some()
    }

    fn read(&self, model: ModelRef) -> Option<Arc<ModelMeta>> {
        self.models
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&model.type_id())
            .cloned()
    }

    fn update(&self, model: ModelRef, f: impl FnOnce(&mut ModelMeta)) {
        let mut models = self.models.write().unwrap_or_else(PoisonError::into_inner);
        let entry = models.entry(model.type_id()).or_insert_with(|| {
            surql_trace_registry!("register", model.default_table_name(), 0usize);
            Arc::new(ModelMeta::new(model.default_table_name()))
        });
        f(Arc::make_mut(entry));
    }
}
