//! Attribute store backing the application's GATT values
//!
//! The store is a fixed table built once at startup. Every value buffer is
//! allocated when its record is created; reads and writes after that only
//! copy bytes in and out of the existing buffers.

use super::error::{AttError, AttResult};
use crate::error::Error;
use log::{debug, warn};

/// A single attribute value slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRecord {
    /// Attribute handle
    handle: u16,
    /// Value buffer, sized to the attribute capacity
    data: Box<[u8]>,
    /// Number of valid bytes in `data`
    len: usize,
}

impl AttributeRecord {
    /// Create a zero-filled record with the given capacity
    pub fn new(handle: u16, capacity: usize) -> Self {
        Self {
            handle,
            data: vec![0; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Create a record whose capacity is exactly the initial value
    pub fn with_value(handle: u16, value: &[u8]) -> Self {
        Self {
            handle,
            data: value.into(),
            len: value.len(),
        }
    }

    /// Create a record with room for `capacity` bytes, pre-filled with `value`
    ///
    /// `value` is truncated to the capacity.
    pub fn with_capacity_and_value(handle: u16, capacity: usize, value: &[u8]) -> Self {
        let mut record = Self::new(handle, capacity);
        let len = value.len().min(capacity);
        record.data[..len].copy_from_slice(&value[..len]);
        record.len = len;
        record
    }

    pub fn handle(&self) -> u16 {
        self.handle
    }

    /// Maximum number of bytes the attribute can hold
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Current number of valid bytes
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The valid portion of the value
    pub fn value(&self) -> &[u8] {
        &self.data[..self.len]
    }
}

/// Handle and capacity of one store entry, as handed to the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDescriptor {
    pub handle: u16,
    pub capacity: usize,
}

/// Fixed table of attribute records
#[derive(Debug, Clone, Default)]
pub struct AttributeStore {
    records: Vec<AttributeRecord>,
}

impl AttributeStore {
    /// Build the store from its records
    ///
    /// Fails if two records share a handle.
    pub fn new(records: Vec<AttributeRecord>) -> Result<Self, Error> {
        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.handle == record.handle) {
                return Err(Error::DuplicateHandle(record.handle));
            }
        }

        Ok(Self { records })
    }

    /// Number of records in the table
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find the record for a handle
    pub fn lookup(&self, handle: u16) -> Option<&AttributeRecord> {
        self.records.iter().find(|r| r.handle == handle)
    }

    fn lookup_mut(&mut self, handle: u16) -> Option<&mut AttributeRecord> {
        self.records.iter_mut().find(|r| r.handle == handle)
    }

    /// Handle/capacity pairs for every record, in declaration order
    pub fn descriptors(&self) -> Vec<AttributeDescriptor> {
        self.records
            .iter()
            .map(|r| AttributeDescriptor {
                handle: r.handle,
                capacity: r.capacity(),
            })
            .collect()
    }

    /// Read up to `requested_len` bytes starting at `offset`
    ///
    /// Reads are bounded by the attribute capacity rather than its current
    /// length, and a request running past the end is truncated instead of
    /// rejected.
    pub fn read(&self, handle: u16, offset: u16, requested_len: usize) -> AttResult<&[u8]> {
        let record = match self.lookup(handle) {
            Some(record) => record,
            None => {
                warn!("Read request to invalid handle: {:#06x}", handle);
                return Err(AttError::InvalidHandle(handle));
            }
        };

        let capacity = record.capacity();
        let start = offset as usize;
        if start >= capacity {
            warn!(
                "Read offset {} beyond capacity {} of handle {:#06x}",
                offset, capacity, handle
            );
            return Err(AttError::InvalidOffset {
                handle,
                offset,
                capacity,
            });
        }

        let len = requested_len.min(capacity - start);
        Ok(&record.data[start..start + len])
    }

    /// Read into `buf`, treating its length as the requested length
    ///
    /// Returns the number of bytes copied.
    pub fn read_into(&self, handle: u16, offset: u16, buf: &mut [u8]) -> AttResult<usize> {
        let value = self.read(handle, offset, buf.len())?;
        buf[..value.len()].copy_from_slice(value);
        Ok(value.len())
    }

    /// Write `value` at `offset`
    ///
    /// The whole value must fit below the capacity; nothing is written
    /// otherwise.
    pub fn write(&mut self, handle: u16, offset: u16, value: &[u8]) -> AttResult<()> {
        let record = match self.lookup_mut(handle) {
            Some(record) => record,
            None => {
                warn!("Write request to invalid handle: {:#06x}", handle);
                return Err(AttError::InvalidHandle(handle));
            }
        };

        let capacity = record.capacity();
        let start = offset as usize;
        if start > capacity || capacity - start < value.len() {
            warn!(
                "Write of {} bytes at offset {} overflows handle {:#06x} (capacity {})",
                value.len(),
                offset,
                handle,
                capacity
            );
            return Err(AttError::InvalidAttributeLength {
                handle,
                offset,
                len: value.len(),
                capacity,
            });
        }

        let end = start + value.len();
        record.data[start..end].copy_from_slice(value);
        record.len = end;

        debug!(
            "Wrote handle {:#06x} offset {}: {}",
            handle,
            offset,
            hex::encode(value)
        );

        Ok(())
    }
}
