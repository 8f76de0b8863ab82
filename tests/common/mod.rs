//! Shared helpers for integration tests
//!
//! `MemoryStore` is an in-process [`ClientStore`] so engine, service and API
//! tests run without PostgreSQL. `xlsx` builds real workbooks with
//! `rust_xlsxwriter`.

#![allow(dead_code)]

use async_trait::async_trait;
use clientbook::adapters::database::ClientStore;
use clientbook::domain::{Client, ClientFields, ClientbookError, CustomerId, Result};
use rust_xlsxwriter::{Format, Workbook};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const HEADER: [&str; 5] = ["customer_id", "name", "email", "country", "age"];

/// In-memory client store
#[derive(Default)]
pub struct MemoryStore {
    clients: Mutex<BTreeMap<CustomerId, Client>>,
    prefetch_calls: AtomicUsize,
    batch_calls: AtomicUsize,
    fail_batches: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Store pre-populated with the given clients
    pub fn with_clients(clients: Vec<Client>) -> Arc<Self> {
        let store = Self::default();
        {
            let mut map = store.clients.lock().unwrap();
            for client in clients {
                map.insert(client.customer_id, client);
            }
        }
        Arc::new(store)
    }

    /// Make every batch insert fail with a database error
    pub fn fail_batches(&self) {
        self.fail_batches.store(true, Ordering::SeqCst);
    }

    pub fn prefetch_calls(&self) -> usize {
        self.prefetch_calls.load(Ordering::SeqCst)
    }

    pub fn batch_calls(&self) -> usize {
        self.batch_calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.clients.lock().unwrap().len()
    }

    pub fn ids(&self) -> Vec<i64> {
        self.clients
            .lock()
            .unwrap()
            .keys()
            .map(|id| id.value())
            .collect()
    }
}

#[async_trait]
impl ClientStore for MemoryStore {
    async fn test_connection(&self) -> Result<()> {
        Ok(())
    }

    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Client>> {
        Ok(self.clients.lock().unwrap().values().cloned().collect())
    }

    async fn get_by_id(&self, id: CustomerId) -> Result<Option<Client>> {
        Ok(self.clients.lock().unwrap().get(&id).cloned())
    }

    async fn exists(&self, id: CustomerId) -> Result<bool> {
        Ok(self.clients.lock().unwrap().contains_key(&id))
    }

    async fn existing_ids_among(
        &self,
        ids: &BTreeSet<CustomerId>,
    ) -> Result<BTreeSet<CustomerId>> {
        self.prefetch_calls.fetch_add(1, Ordering::SeqCst);
        let clients = self.clients.lock().unwrap();
        Ok(ids
            .iter()
            .filter(|id| clients.contains_key(*id))
            .copied()
            .collect())
    }

    async fn insert(&self, client: &Client) -> Result<Client> {
        let mut clients = self.clients.lock().unwrap();
        if clients.contains_key(&client.customer_id) {
            return Err(ClientbookError::DuplicateKey(client.customer_id));
        }
        clients.insert(client.customer_id, client.clone());
        Ok(client.clone())
    }

    async fn insert_many(&self, batch: &[Client]) -> Result<usize> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_batches.load(Ordering::SeqCst) {
            return Err(ClientbookError::Database("connection reset".to_string()));
        }

        let mut clients = self.clients.lock().unwrap();
        let mut staged = BTreeSet::new();
        for client in batch {
            if clients.contains_key(&client.customer_id) || !staged.insert(client.customer_id) {
                return Err(ClientbookError::DuplicateKey(client.customer_id));
            }
        }
        for client in batch {
            clients.insert(client.customer_id, client.clone());
        }
        Ok(batch.len())
    }

    async fn update(&self, id: CustomerId, fields: &ClientFields) -> Result<Option<Client>> {
        let mut clients = self.clients.lock().unwrap();
        Ok(clients.get_mut(&id).map(|client| {
            client.name = fields.name.clone();
            client.email = fields.email.clone();
            client.country = fields.country.clone();
            client.age = fields.age;
            client.clone()
        }))
    }

    async fn delete(&self, id: CustomerId) -> Result<bool> {
        Ok(self.clients.lock().unwrap().remove(&id).is_some())
    }

    fn database_name(&self) -> &str {
        "memory"
    }
}

/// A spreadsheet cell for fixtures
#[derive(Debug, Clone)]
pub enum Cell {
    Text(String),
    Number(f64),
    Blank,
    /// No value, but carries a format so the cell is still written
    Formatted,
}

pub fn text(value: &str) -> Cell {
    Cell::Text(value.to_string())
}

pub fn num(value: f64) -> Cell {
    Cell::Number(value)
}

/// A well-formed row: id, name, email, country, age
pub fn row(id: f64, name: &str, email: &str, country: &str, age: Option<f64>) -> Vec<Cell> {
    vec![
        num(id),
        text(name),
        text(email),
        text(country),
        age.map(num).unwrap_or(Cell::Blank),
    ]
}

/// Build an xlsx workbook with one sheet
pub fn xlsx(sheet_name: &str, header: &[&str], rows: &[Vec<Cell>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name).unwrap();

    for (col, name) in header.iter().enumerate() {
        worksheet.write_string(0, col as u16, *name).unwrap();
    }

    for (idx, cells) in rows.iter().enumerate() {
        let row_num = idx as u32 + 1;
        for (col, cell) in cells.iter().enumerate() {
            match cell {
                Cell::Text(value) => {
                    worksheet.write_string(row_num, col as u16, value).unwrap();
                }
                Cell::Number(value) => {
                    worksheet.write_number(row_num, col as u16, *value).unwrap();
                }
                Cell::Blank => {}
                Cell::Formatted => {
                    let format = Format::new().set_bold();
                    worksheet.write_blank(row_num, col as u16, &format).unwrap();
                }
            }
        }
    }

    workbook.save_to_buffer().unwrap()
}

/// Workbook with the standard `Clientes` sheet and header
pub fn clientes(rows: &[Vec<Cell>]) -> Vec<u8> {
    xlsx("Clientes", &HEADER, rows)
}

pub fn client(id: i64, name: &str) -> Client {
    Client {
        customer_id: CustomerId::new(id),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        country: "AR".to_string(),
        age: Some(30),
    }
}
