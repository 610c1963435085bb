use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Debug, Formatter};

type Filter<Entity> = Box<dyn Fn(&Entity) -> bool + Sync + Send>;
type Comparator<Entity> = Box<dyn Fn(&Entity, &Entity) -> Ordering + Sync + Send>;

// Query composes a filter predicate, an ordering and an optional limit that a repository
// applies over its records. Records that compare equal keep their storage order, and the
// limit is taken after ordering.
pub struct Query<Entity> {
    filter: Option<Filter<Entity>>,
    order_by: Option<Comparator<Entity>>,
    limit: Option<usize>,
}

impl<Entity> Query<Entity> {
    // matches every record
    pub fn all() -> Self {
        Query {
            filter: None,
            order_by: None,
            limit: None,
        }
    }

    pub fn filter<F>(mut self, predicate: F) -> Self
        where F: Fn(&Entity) -> bool + Sync + Send + 'static {
        self.filter = Some(Box::new(predicate));
        self
    }

    pub fn order_by<F>(mut self, comparator: F) -> Self
        where F: Fn(&Entity, &Entity) -> Ordering + Sync + Send + 'static {
        self.order_by = Some(Box::new(comparator));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, entity: &Entity) -> bool {
        match &self.filter {
            Some(predicate) => predicate(entity),
            None => true,
        }
    }

    // applies filter, stable ordering and limit to records given in storage order
    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a Entity>
        where I: IntoIterator<Item=&'a Entity> {
        let mut matched: Vec<&Entity> = records.into_iter().filter(|e| self.matches(e)).collect();
        if let Some(comparator) = &self.order_by {
            matched.sort_by(|a, b| comparator(a, b));
        }
        if let Some(limit) = self.limit {
            matched.truncate(limit);
        }
        matched
    }
}

impl<Entity> Debug for Query<Entity> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("filtered", &self.filter.is_some())
            .field("ordered", &self.order_by.is_some())
            .field("limit", &self.limit)
            .finish()
    }
}
