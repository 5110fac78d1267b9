//! Document store contract and its MongoDB implementation.
//!
//! The store forwards calls to the driver with no interpretation of the
//! documents it is given. Result policy lives in [`super::MongoDal`].

use super::{DalError, DalResult};
use mongodb::bson::Document;
use mongodb::sync::{Client, Collection};

/// Options for a find query.
///
/// `None` limit or skip means zero, which the driver treats as "no limit" and
/// "skip nothing".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindQuery {
    pub filter: Document,
    pub projection: Option<Document>,
    pub sort: Option<Document>,
    pub limit: Option<i64>,
    pub skip: Option<u64>,
}

impl FindQuery {
    pub fn new(filter: Document) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn projection(mut self, projection: Document) -> Self {
        self.projection = Some(projection);
        self
    }

    pub fn sort(mut self, sort: Document) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn effective_limit(&self) -> i64 {
        self.limit.unwrap_or(0)
    }

    pub fn effective_skip(&self) -> u64 {
        self.skip.unwrap_or(0)
    }

    /// Returns a copy with absent limit and skip replaced by zero.
    pub fn with_defaults(&self) -> Self {
        Self {
            limit: Some(self.effective_limit()),
            skip: Some(self.effective_skip()),
            ..self.clone()
        }
    }
}

/// Counts reported by an update-many call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub matched_count: u64,
    pub modified_count: u64,
    /// Whether the call inserted a new document because nothing matched.
    pub upserted: bool,
}

/// Driver-facing operations used by the data access layer.
pub trait DocumentStore: Send + Sync {
    fn find(
        &self,
        database: &str,
        collection: &str,
        query: &FindQuery,
    ) -> DalResult<Vec<Document>>;
    fn insert_many(
        &self,
        database: &str,
        collection: &str,
        documents: &[Document],
    ) -> DalResult<()>;
    fn update_many(
        &self,
        database: &str,
        collection: &str,
        filter: &Document,
        update: &Document,
        upsert: bool,
    ) -> DalResult<UpdateSummary>;
}

/// [`DocumentStore`] backed by the blocking MongoDB client.
#[derive(Debug, Clone)]
pub struct MongoStore {
    client: Client,
}

impl MongoStore {
    /// Builds a client from a MongoDB connection URI.
    ///
    /// The driver connects lazily; this only fails on an unusable URI or
    /// client options.
    pub fn connect(uri: &str) -> DalResult<Self> {
        let client = Client::with_uri_str(uri)
            .map_err(DalError::ClientConstruction)?;
        Ok(Self { client })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    fn collection(&self, database: &str, collection: &str) -> Collection<Document> {
        self.client.database(database).collection::<Document>(collection)
    }
}

impl DocumentStore for MongoStore {
    fn find(
        &self,
        database: &str,
        collection: &str,
        query: &FindQuery,
    ) -> DalResult<Vec<Document>> {
        let coll = self.collection(database, collection);
        let mut action = coll
            .find(query.filter.clone())
            .limit(query.effective_limit())
            .skip(query.effective_skip());
        if let Some(projection) = &query.projection {
            action = action.projection(projection.clone());
        }
        if let Some(sort) = &query.sort {
            action = action.sort(sort.clone());
        }

        let cursor = action.run()?;
        let documents = cursor.collect::<Result<Vec<_>, _>>()?;
        Ok(documents)
    }

    fn insert_many(
        &self,
        database: &str,
        collection: &str,
        documents: &[Document],
    ) -> DalResult<()> {
        self.collection(database, collection)
            .insert_many(documents)
            .run()?;
        Ok(())
    }

    fn update_many(
        &self,
        database: &str,
        collection: &str,
        filter: &Document,
        update: &Document,
        upsert: bool,
    ) -> DalResult<UpdateSummary> {
        let result = self
            .collection(database, collection)
            .update_many(filter.clone(), update.clone())
            .upsert(upsert)
            .run()?;

        Ok(UpdateSummary {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted: result.upserted_id.is_some(),
        })
    }
}
