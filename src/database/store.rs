//! 内存记录存储

use parking_lot::RwLock;

use crate::model::types::Record;

/// 只追加的内存记录存储
///
/// 写入顺序即读取顺序，记录写入后不会被修改或删除
#[derive(Default)]
pub struct RecordStore {
    records: RwLock<Vec<Record>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条记录，返回存入的记录
    pub fn append(&self, record: Record) -> Record {
        let mut records = self.records.write();
        records.push(record.clone());
        record
    }

    /// 按写入顺序返回全部记录
    pub fn snapshot(&self) -> Vec<Record> {
        self.records.read().clone()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }
}
