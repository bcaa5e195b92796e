//! The recipes service.

use crate::{NewRecipe, RecipeRecord, RecipeSubscription, ServiceError};
use chrono::{SecondsFormat, Utc};
use recetario_store::{RemoteStore, Snapshot};
use recetario_types::{OwnerId, RecipeId, StorePath};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, warn};

/// Root collection of the persisted layout:
/// `customRecipes/{ownerId}/{recipeId}`.
pub const CUSTOM_RECIPES_ROOT: &str = "customRecipes";

/// Sole mediator between application code and the store for custom
/// recipes.
///
/// Every operation is one independent asynchronous round trip; no
/// mutual exclusion is imposed here, and concurrent writers to the
/// same record are last-writer-wins at the store.
///
/// See the [crate docs](crate) for the failure semantics.
#[derive(Debug, Clone)]
pub struct RecipesService<S> {
    store: S,
}

impl<S: RemoteStore> RecipesService<S> {
    /// Creates a service over the given store backend.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    fn owner_path(owner: &OwnerId) -> StorePath {
        StorePath::root(CUSTOM_RECIPES_ROOT).child(owner.as_str())
    }

    fn recipe_path(owner: &OwnerId, id: &RecipeId) -> StorePath {
        Self::owner_path(owner).child(id.as_str())
    }

    /// Creates a recipe under `owner`'s namespace.
    ///
    /// Requests a fresh store key, merges the documented defaults into
    /// `input`, stamps `createdAt`/`createdBy`, and writes the full
    /// record in one single-record-atomic operation: on failure there
    /// is no partial write to clean up. On success the record is
    /// durably readable and the returned id is echoed inside it.
    pub async fn create_recipe(
        &self,
        owner: &OwnerId,
        input: NewRecipe,
    ) -> Result<RecipeId, ServiceError> {
        let namespace = Self::owner_path(owner);
        let id = RecipeId::new(self.store.push_key(&namespace).await?);

        let record = input.into_record(id.clone(), owner.clone(), now_rfc3339());
        let value = serde_json::to_value(&record)?;

        self.store
            .write(&Self::recipe_path(owner, &id), value)
            .await?;

        debug!(owner = %owner, recipe = %id, "created recipe");
        Ok(id)
    }

    /// Reads all of `owner`'s recipes in one round trip.
    ///
    /// Order is the store's child-key enumeration order (creation
    /// order, given creation-ordered keys). An absent namespace yields
    /// an empty vec, and so does a failed read, after logging: the
    /// two are indistinguishable from the return value alone. This
    /// lossy collapse is deliberate and kept; see DESIGN.md.
    pub async fn get_user_recipes(&self, owner: &OwnerId) -> Vec<RecipeRecord> {
        match self.store.read(&Self::owner_path(owner)).await {
            Ok(snapshot) => records_from_snapshot(&snapshot),
            Err(e) => {
                error!(owner = %owner, error = %e, "failed to read user recipes");
                Vec::new()
            }
        }
    }

    /// Reads every owner's recipes in one round trip and flattens them.
    ///
    /// Relative order is owner enumeration order, then per-owner key
    /// order. No de-duplication and no cross-owner sort: the global feed
    /// is derived on read, never stored. Empty root and failed read
    /// both yield an empty vec (same collapse as
    /// [`get_user_recipes`](Self::get_user_recipes)).
    pub async fn get_all_custom_recipes(&self) -> Vec<RecipeRecord> {
        let root = StorePath::root(CUSTOM_RECIPES_ROOT);
        match self.store.read(&root).await {
            Ok(snapshot) => match snapshot.value() {
                Some(Value::Object(owners)) => {
                    let mut recipes = Vec::new();
                    for namespace in owners.values() {
                        recipes.extend(records_from_value(namespace));
                    }
                    recipes
                }
                _ => Vec::new(),
            },
            Err(e) => {
                error!(error = %e, "failed to read custom recipes root");
                Vec::new()
            }
        }
    }

    /// Replaces the record at `owner`/`id` with `data` plus a fresh
    /// `updatedAt`.
    ///
    /// This is a destructive replace, not a patch: fields omitted from
    /// `data` are **not** preserved, and callers must supply the
    /// complete desired record. No existence check is made; updating
    /// an absent path creates it.
    pub async fn update_recipe(
        &self,
        owner: &OwnerId,
        id: &RecipeId,
        mut data: RecipeRecord,
    ) -> Result<(), ServiceError> {
        data.updated_at = Some(now_rfc3339());
        let value = serde_json::to_value(&data)?;

        self.store.write(&Self::recipe_path(owner, id), value).await?;

        debug!(owner = %owner, recipe = %id, "updated recipe");
        Ok(())
    }

    /// Removes the record at `owner`/`id`.
    ///
    /// Hard delete, no tombstone. Deleting an absent record succeeds.
    pub async fn delete_recipe(&self, owner: &OwnerId, id: &RecipeId) -> Result<(), ServiceError> {
        self.store.delete(&Self::recipe_path(owner, id)).await?;

        debug!(owner = %owner, recipe = %id, "deleted recipe");
        Ok(())
    }

    /// Subscribes to `owner`'s namespace.
    ///
    /// `callback` is invoked with the full normalized recipe list
    /// (not deltas), once for the current state and again after every
    /// change by any writer, in store delivery order (rapid changes
    /// may be coalesced by the store). The subscription persists until
    /// [`RecipeSubscription::unsubscribe`] is invoked.
    ///
    /// Must be called within a tokio runtime.
    pub fn listen_to_user_recipes(
        &self,
        owner: &OwnerId,
        callback: impl Fn(Vec<RecipeRecord>) + Send + 'static,
    ) -> RecipeSubscription {
        let mut watch = self.store.watch(&Self::owner_path(owner));

        let forwarder = tokio::spawn(async move {
            while let Some(snapshot) = watch.recv().await {
                callback(records_from_snapshot(&snapshot));
            }
        });

        RecipeSubscription::new(forwarder)
    }
}

fn records_from_snapshot(snapshot: &Snapshot) -> Vec<RecipeRecord> {
    snapshot.value().map(records_from_value).unwrap_or_default()
}

/// Normalizes one namespace value (a key → record object) into records,
/// in child-key enumeration order. Malformed entries are skipped with a
/// warning rather than failing the whole read.
fn records_from_value(value: &Value) -> Vec<RecipeRecord> {
    let Value::Object(children) = value else {
        return Vec::new();
    };

    children
        .iter()
        .filter_map(|(key, raw)| match RecipeRecord::deserialize(raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(key = %key, error = %e, "skipping malformed recipe record");
                None
            }
        })
        .collect()
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_CATEGORY, DEFAULT_DIFFICULTY, PLACEHOLDER_IMAGE_URL};
    use recetario_store::{MemoryStore, StoreError, StoreWatch};
    use serde_json::json;

    fn soup() -> NewRecipe {
        NewRecipe::new("Soup", "Hot", "water,salt", "Boil")
    }

    fn service() -> RecipesService<MemoryStore> {
        RecipesService::new(MemoryStore::new())
    }

    #[tokio::test]
    async fn created_record_is_readable_with_its_id() {
        let service = service();
        let owner = OwnerId::new("u1");

        let id = service.create_recipe(&owner, soup()).await.unwrap();
        let recipes = service.get_user_recipes(&owner).await;

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, id);
        assert_eq!(recipes[0].name, "Soup");
        assert_eq!(recipes[0].created_by, Some(owner));
        assert!(recipes[0].created_at.is_some());
    }

    #[tokio::test]
    async fn create_fills_documented_defaults() {
        let service = service();
        let owner = OwnerId::new("u1");

        service.create_recipe(&owner, soup()).await.unwrap();
        let recipes = service.get_user_recipes(&owner).await;

        assert_eq!(recipes[0].image.as_deref(), Some(PLACEHOLDER_IMAGE_URL));
        assert_eq!(recipes[0].category.as_deref(), Some(DEFAULT_CATEGORY));
        assert_eq!(recipes[0].difficulty.as_deref(), Some(DEFAULT_DIFFICULTY));
    }

    #[tokio::test]
    async fn recipes_enumerate_in_creation_order() {
        let service = service();
        let owner = OwnerId::new("u1");

        for name in ["first", "second", "third"] {
            service
                .create_recipe(&owner, NewRecipe::new(name, "d", "i", "s"))
                .await
                .unwrap();
        }

        let recipes = service.get_user_recipes(&owner).await;
        let names: Vec<&str> = recipes
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn empty_namespace_reads_as_empty() {
        let service = service();
        assert!(service.get_user_recipes(&OwnerId::new("nobody")).await.is_empty());
        assert!(service.get_all_custom_recipes().await.is_empty());
    }

    #[tokio::test]
    async fn all_recipes_flatten_across_owners() {
        let service = service();
        let a = OwnerId::new("a");
        let b = OwnerId::new("b");

        let r1 = service.create_recipe(&a, NewRecipe::new("r1", "d", "i", "s")).await.unwrap();
        let r2 = service.create_recipe(&a, NewRecipe::new("r2", "d", "i", "s")).await.unwrap();
        let r3 = service.create_recipe(&b, NewRecipe::new("r3", "d", "i", "s")).await.unwrap();

        let mut ids: Vec<RecipeId> = service
            .get_all_custom_recipes()
            .await
            .into_iter()
            .map(|r| r.id)
            .collect();
        ids.sort();

        let mut expected = vec![r1, r2, r3];
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn update_is_a_destructive_replace() {
        let service = service();
        let owner = OwnerId::new("u1");
        let id = service.create_recipe(&owner, soup()).await.unwrap();

        let replacement = RecipeRecord {
            id: id.clone(),
            name: "Soup v2".into(),
            description: "Hot".into(),
            ingredients: "water,salt,pepper".into(),
            instructions: "Boil".into(),
            image: None,
            category: None,
            area: None,
            prep_time: None,
            servings: None,
            difficulty: None,
            created_at: None,
            updated_at: None,
            created_by: None,
        };
        service.update_recipe(&owner, &id, replacement).await.unwrap();

        let recipes = service.get_user_recipes(&owner).await;
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Soup v2");
        assert!(recipes[0].updated_at.is_some());
        // Omitted fields are gone, not merged from the old record.
        assert_eq!(recipes[0].image, None);
        assert_eq!(recipes[0].created_at, None);
    }

    #[tokio::test]
    async fn update_creates_absent_records() {
        let service = service();
        let owner = OwnerId::new("u1");
        let id = RecipeId::new("never-created");

        let data = RecipeRecord {
            id: id.clone(),
            name: "Ghost".into(),
            description: "d".into(),
            ingredients: "i".into(),
            instructions: "s".into(),
            image: None,
            category: None,
            area: None,
            prep_time: None,
            servings: None,
            difficulty: None,
            created_at: None,
            updated_at: None,
            created_by: None,
        };
        service.update_recipe(&owner, &id, data).await.unwrap();

        assert_eq!(service.get_user_recipes(&owner).await.len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_and_is_idempotent() {
        let service = service();
        let owner = OwnerId::new("u1");
        let id = service.create_recipe(&owner, soup()).await.unwrap();

        service.delete_recipe(&owner, &id).await.unwrap();
        assert!(service.get_user_recipes(&owner).await.is_empty());

        // Absent record: still success.
        service.delete_recipe(&owner, &id).await.unwrap();
    }

    #[tokio::test]
    async fn malformed_records_are_skipped() {
        let service = service();
        let owner = OwnerId::new("u1");
        service.create_recipe(&owner, soup()).await.unwrap();

        // A record missing required fields, written behind the
        // service's back.
        service
            .store()
            .write(
                &RecipesService::<MemoryStore>::recipe_path(&owner, &RecipeId::new("broken")),
                json!({"unexpected": true}),
            )
            .await
            .unwrap();

        let recipes = service.get_user_recipes(&owner).await;
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Soup");
    }

    /// Store stub whose request/response operations always fail;
    /// watches are delegated to an inner working store.
    struct FailingStore {
        inner: MemoryStore,
    }

    impl RemoteStore for FailingStore {
        async fn read(&self, path: &StorePath) -> Result<Snapshot, StoreError> {
            Err(StoreError::status(503, path.to_string()))
        }

        async fn write(&self, path: &StorePath, _value: Value) -> Result<(), StoreError> {
            Err(StoreError::status(503, path.to_string()))
        }

        async fn delete(&self, path: &StorePath) -> Result<(), StoreError> {
            Err(StoreError::status(503, path.to_string()))
        }

        async fn push_key(&self, path: &StorePath) -> Result<String, StoreError> {
            Err(StoreError::status(503, path.to_string()))
        }

        fn watch(&self, path: &StorePath) -> StoreWatch {
            self.inner.watch(path)
        }
    }

    #[tokio::test]
    async fn failed_reads_collapse_to_empty() {
        let service = RecipesService::new(FailingStore {
            inner: MemoryStore::new(),
        });

        assert!(service.get_user_recipes(&OwnerId::new("u1")).await.is_empty());
        assert!(service.get_all_custom_recipes().await.is_empty());
    }

    #[tokio::test]
    async fn failed_writes_surface_the_store_error() {
        let service = RecipesService::new(FailingStore {
            inner: MemoryStore::new(),
        });
        let owner = OwnerId::new("u1");

        let err = service.create_recipe(&owner, soup()).await.unwrap_err();
        assert!(err.to_string().contains("503"));

        let err = service
            .delete_recipe(&owner, &RecipeId::new("r1"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Store(_)));
    }
}
