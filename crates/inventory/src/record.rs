use stockroom_core::{DomainError, DomainResult, Entity, RecordName};

/// A named stock counter.
///
/// Query and command are deliberately separate: [`is_stock_sufficient`]
/// reads without mutating, [`decrease_stock`] mutates without answering a
/// question. Callers sequence "ask, then act" themselves; the command
/// re-checks the guard and reports a rejected decrement as an explicit
/// error rather than silently doing nothing.
///
/// [`is_stock_sufficient`]: InventoryRecord::is_stock_sufficient
/// [`decrease_stock`]: InventoryRecord::decrease_stock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    name: RecordName,
    stock: u64,
}

impl InventoryRecord {
    /// Create a record with an initial stock count.
    ///
    /// The name is the record's identity and cannot change afterwards;
    /// blank names are rejected.
    pub fn new(name: impl Into<String>, stock: u64) -> DomainResult<Self> {
        Ok(Self {
            name: RecordName::new(name)?,
            stock,
        })
    }

    pub fn name(&self) -> &RecordName {
        &self.name
    }

    /// Units currently on hand.
    pub fn stock(&self) -> u64 {
        self.stock
    }

    /// Query: true iff at least `quantity` units are on hand.
    ///
    /// Pure read. The `&self` receiver makes the absence of side effects a
    /// compiler-checked fact.
    pub fn is_stock_sufficient(&self, quantity: u64) -> bool {
        self.stock >= quantity
    }

    /// Command: remove `quantity` units from stock.
    ///
    /// When fewer than `quantity` units are on hand the decrement is
    /// rejected and stock stays untouched.
    pub fn decrease_stock(&mut self, quantity: u64) -> DomainResult<()> {
        if !self.is_stock_sufficient(quantity) {
            return Err(DomainError::invariant("stock cannot go negative"));
        }
        self.stock -= quantity;
        Ok(())
    }
}

impl Entity for InventoryRecord {
    type Id = RecordName;

    fn id(&self) -> &RecordName {
        &self.name
    }
}
