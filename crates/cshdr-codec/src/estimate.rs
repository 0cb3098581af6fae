//! Compact record size estimation.

use crate::record::SectionHeader;
use crate::varint::varint_size;

/// Default section type: `SHT_PROGBITS`.
///
/// Most sections in real tables are program data, so type 1 is the value
/// the encoding elides. This is a policy constant of the format, not an ELF
/// default.
pub const DEFAULT_SH_TYPE: u32 = 1;

/// Estimated encoded size of one compact section header record, in bytes.
///
/// Every record pays one tag byte plus varints for the name offset and file
/// offset; those two are always present since a value of 0 is meaningful
/// for both. Each remaining numeric field contributes a varint only when it
/// differs from its default (`sh_type` defaults to [`DEFAULT_SH_TYPE`], the
/// rest to 0). Alignment is stored as a one-byte log2 exponent and costs
/// nothing when unconstrained.
#[must_use]
pub fn record_size(record: &SectionHeader) -> usize {
    let mut total = 1; // tag byte
    total += varint_size(u64::from(record.name));
    total += varint_size(record.offset);

    if record.sh_type != DEFAULT_SH_TYPE {
        total += varint_size(u64::from(record.sh_type));
    }
    if record.flags != 0 {
        total += varint_size(record.flags);
    }
    if record.addr != 0 {
        total += varint_size(record.addr);
    }
    if record.size != 0 {
        total += varint_size(record.size);
    }
    if record.link != 0 {
        total += varint_size(u64::from(record.link));
    }
    if record.info != 0 {
        total += varint_size(u64::from(record.info));
    }
    if record.entsize != 0 {
        total += varint_size(record.entsize);
    }
    if record.addralign > 1 {
        total += 1; // log2(addralign) exponent byte
    }

    total
}

/// Estimated compact size of a whole section header table.
#[must_use]
pub fn table_size(records: &[SectionHeader]) -> usize {
    records.iter().map(record_size).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Record with every elidable field at its default.
    fn floor_record() -> SectionHeader {
        SectionHeader {
            sh_type: DEFAULT_SH_TYPE,
            addralign: 1,
            ..SectionHeader::default()
        }
    }

    #[test]
    fn test_floor_cost() {
        // All defaults: tag + name varint + offset varint, nothing else
        let record = floor_record();
        assert_eq!(record_size(&record), 3);

        let record = SectionHeader {
            name: 200,
            offset: 0x4000,
            ..floor_record()
        };
        assert_eq!(
            record_size(&record),
            1 + varint_size(200) + varint_size(0x4000)
        );
    }

    #[test]
    fn test_zero_alignment_is_free() {
        let record = SectionHeader {
            addralign: 0,
            ..floor_record()
        };
        assert_eq!(record_size(&record), 3);
    }

    #[test]
    fn test_each_field_is_independent() {
        let floor = record_size(&floor_record());

        let record = SectionHeader {
            sh_type: 8,
            ..floor_record()
        };
        assert_eq!(record_size(&record), floor + varint_size(8));

        let record = SectionHeader {
            flags: 0x42,
            ..floor_record()
        };
        assert_eq!(record_size(&record), floor + varint_size(0x42));

        let record = SectionHeader {
            addr: 0x40_0000,
            ..floor_record()
        };
        assert_eq!(record_size(&record), floor + varint_size(0x40_0000));

        let record = SectionHeader {
            size: 4096,
            ..floor_record()
        };
        assert_eq!(record_size(&record), floor + varint_size(4096));

        let record = SectionHeader {
            link: 27,
            ..floor_record()
        };
        assert_eq!(record_size(&record), floor + varint_size(27));

        let record = SectionHeader {
            info: 300,
            ..floor_record()
        };
        assert_eq!(record_size(&record), floor + varint_size(300));

        let record = SectionHeader {
            entsize: 24,
            ..floor_record()
        };
        assert_eq!(record_size(&record), floor + varint_size(24));
    }

    #[test]
    fn test_type_zero_is_not_default() {
        // sh_type elides on 1, not 0: a SHT_NULL section pays for its type
        let record = SectionHeader {
            sh_type: 0,
            ..floor_record()
        };
        assert_eq!(record_size(&record), record_size(&floor_record()) + 1);
    }

    #[test]
    fn test_alignment_costs_one_byte_regardless_of_magnitude() {
        let floor = record_size(&floor_record());
        for addralign in [2u64, 8, 4096, 1 << 21, 1 << 63] {
            let record = SectionHeader {
                addralign,
                ..floor_record()
            };
            assert_eq!(record_size(&record), floor + 1);
        }
    }

    #[test]
    fn test_progbits_with_size() {
        // .rodata-ish section: type 3 differs from default, size needs 2 bytes
        let record = SectionHeader {
            sh_type: 3,
            size: 4096,
            ..floor_record()
        };
        assert_eq!(record_size(&record), 3 + 1 + 2);
    }

    #[test]
    fn test_realistic_text_section() {
        let record = SectionHeader {
            name: 27,
            sh_type: DEFAULT_SH_TYPE,
            flags: 0x6, // SHF_ALLOC | SHF_EXECINSTR
            addr: 0x40_1000,
            offset: 0x1000,
            size: 0x2_0000,
            addralign: 16,
            ..SectionHeader::default()
        };
        let expected = 1
            + varint_size(27)
            + varint_size(0x1000)
            + varint_size(0x6)
            + varint_size(0x40_1000)
            + varint_size(0x2_0000)
            + 1;
        assert_eq!(record_size(&record), expected);
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(table_size(&[]), 0);
    }

    #[test]
    fn test_table_is_order_independent() {
        let a = SectionHeader {
            name: 1,
            sh_type: 3,
            size: 100,
            ..floor_record()
        };
        let b = SectionHeader {
            name: 9,
            flags: 0x3,
            addralign: 8,
            ..floor_record()
        };
        let c = floor_record();

        let forward = table_size(&[a.clone(), b.clone(), c.clone()]);
        let reversed = table_size(&[c, b, a]);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_table_is_sum_of_records() {
        let records = vec![
            floor_record(),
            SectionHeader {
                name: 11,
                sh_type: 2,
                size: 0x600,
                link: 3,
                entsize: 24,
                addralign: 8,
                ..SectionHeader::default()
            },
        ];
        let expected: usize = records.iter().map(record_size).sum();
        assert_eq!(table_size(&records), expected);
    }
}
