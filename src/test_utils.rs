//! テスト用ユーティリティ
//!
//! 翻訳ストア・モデル・クエリビルダーのテスト用実装を提供します。
#![cfg(test)]

use std::convert::Infallible;

use serde_json::Value;
use thiserror::Error;

use crate::model::TranslatableModel;
use crate::query::{
    Boolean,
    ConnectionType,
    SortDirection,
    TranslatableQuery,
};
use crate::translator::{
    InMemoryTranslator,
    Translator,
};

/// 書き込みを記録する翻訳ストア
#[derive(Debug, Default)]
pub(crate) struct RecordingTranslator {
    pub(crate) store: InMemoryTranslator,
    /// `(attribute, value, locale)` の順で記録される `set` 呼び出し
    pub(crate) writes: Vec<(String, Value, String)>,
}

impl Translator for RecordingTranslator {
    type Error = Infallible;

    fn get(&self, attribute: &str, locale: &str) -> Result<Option<Value>, Self::Error> {
        self.store.get(attribute, locale)
    }

    fn set(&mut self, attribute: &str, value: Value, locale: &str) -> Result<(), Self::Error> {
        self.writes.push((attribute.to_string(), value.clone(), locale.to_string()));
        self.store.set(attribute, value, locale)
    }
}

#[derive(Debug, Error)]
#[error("translation store unavailable")]
pub(crate) struct StoreUnavailable;

/// 常に失敗する翻訳ストア
#[derive(Debug, Default)]
pub(crate) struct FailingTranslator;

impl Translator for FailingTranslator {
    type Error = StoreUnavailable;

    fn get(&self, _attribute: &str, _locale: &str) -> Result<Option<Value>, Self::Error> {
        Err(StoreUnavailable)
    }

    fn set(&mut self, _attribute: &str, _value: Value, _locale: &str) -> Result<(), Self::Error> {
        Err(StoreUnavailable)
    }
}

/// `title` と `body` が翻訳対象のテスト用モデル
#[derive(Debug, Default)]
pub(crate) struct Post<T = RecordingTranslator> {
    pub(crate) translator: T,
}

impl Post {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_translations(store: InMemoryTranslator) -> Self {
        Self { translator: RecordingTranslator { store, writes: Vec::new() } }
    }

    pub(crate) fn writes(&self) -> &[(String, Value, String)] {
        &self.translator.writes
    }
}

impl<T: Translator> TranslatableModel for Post<T> {
    type Translator = T;

    fn translator(&self) -> &Self::Translator {
        &self.translator
    }

    fn translator_mut(&mut self) -> &mut Self::Translator {
        &mut self.translator
    }

    fn is_translatable(&self, attribute: &str) -> bool {
        matches!(attribute, "title" | "body")
    }

    fn qualified_key_name(&self) -> String {
        "posts.id".to_string()
    }
}

/// クエリビルダーに渡された句
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Clause {
    Where { column: String, operator: String, value: Value, boolean: Boolean },
    WhereTranslatable {
        attribute: String,
        value: Value,
        locale: Option<String>,
        operator: String,
        boolean: Boolean,
    },
    Nested { boolean: Boolean, clauses: Vec<Clause> },
    OrderBy { column: String, direction: SortDirection },
    OrderByTranslatable { attribute: String, direction: SortDirection, locale: String },
}

/// 句を記録するだけのクエリビルダー
#[derive(Debug)]
pub(crate) struct RecordingQuery {
    pub(crate) model: Post,
    pub(crate) connection: ConnectionType,
    pub(crate) clauses: Vec<Clause>,
    pub(crate) relations: Vec<String>,
    pub(crate) translations_scope: bool,
}

impl RecordingQuery {
    pub(crate) fn new(connection: ConnectionType) -> Self {
        Self {
            model: Post::new(),
            connection,
            clauses: Vec::new(),
            relations: Vec::new(),
            translations_scope: true,
        }
    }
}

impl TranslatableQuery for RecordingQuery {
    type Model = Post;

    fn model(&self) -> &Self::Model {
        &self.model
    }

    fn connection_type(&self) -> ConnectionType {
        self.connection
    }

    fn where_column(&mut self, column: &str, operator: &str, value: Value, boolean: Boolean) {
        self.clauses.push(Clause::Where {
            column: column.to_string(),
            operator: operator.to_string(),
            value,
            boolean,
        });
    }

    fn where_translatable(
        &mut self,
        attribute: &str,
        value: Value,
        locale: Option<&str>,
        operator: &str,
        boolean: Boolean,
    ) {
        self.clauses.push(Clause::WhereTranslatable {
            attribute: attribute.to_string(),
            value,
            locale: locale.map(ToString::to_string),
            operator: operator.to_string(),
            boolean,
        });
    }

    fn where_nested(&mut self, boolean: Boolean, build: &mut dyn FnMut(&mut Self)) {
        let outer = std::mem::take(&mut self.clauses);
        build(self);
        let clauses = std::mem::replace(&mut self.clauses, outer);
        self.clauses.push(Clause::Nested { boolean, clauses });
    }

    fn order_by(&mut self, column: &str, direction: SortDirection) {
        self.clauses.push(Clause::OrderBy { column: column.to_string(), direction });
    }

    fn order_by_translatable(&mut self, attribute: &str, direction: SortDirection, locale: &str) {
        self.clauses.push(Clause::OrderByTranslatable {
            attribute: attribute.to_string(),
            direction,
            locale: locale.to_string(),
        });
    }

    fn has_orders(&self) -> bool {
        self.clauses
            .iter()
            .any(|c| matches!(c, Clause::OrderBy { .. } | Clause::OrderByTranslatable { .. }))
    }

    fn with_relation(&mut self, relation: &str) {
        self.relations.push(relation.to_string());
    }

    fn without_translations_scope(&mut self) {
        self.translations_scope = false;
    }
}
