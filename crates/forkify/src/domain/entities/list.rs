use rand::{Rng, distr::Alphanumeric};

const ITEM_ID_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    pub count: Option<f64>,
    pub unit: String,
    pub ingredient: String,
}

/// Shopping list. Lives for the session only.
#[derive(Debug, Clone, Default)]
pub struct List {
    items: Vec<Item>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn add_item(
        &mut self,
        count: Option<f64>,
        unit: impl Into<String>,
        ingredient: impl Into<String>,
    ) -> Item {
        let item = Item {
            id: self.generate_id(),
            count,
            unit: unit.into(),
            ingredient: ingredient.into(),
        };
        self.items.push(item.clone());

        item
    }

    /// Remove an item. Unknown ids are ignored and yield `None`.
    pub fn delete_item(&mut self, id: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Set an item's count. Returns `false` for unknown ids.
    pub fn update_count(&mut self, id: &str, count: f64) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.count = Some(count);
                true
            }
            None => false,
        }
    }

    fn generate_id(&self) -> String {
        let mut rng = rand::rng();
        loop {
            let id: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(ITEM_ID_LEN)
                .map(char::from)
                .collect();
            if !self.items.iter().any(|item| item.id == id) {
                return id;
            }
        }
    }
}
