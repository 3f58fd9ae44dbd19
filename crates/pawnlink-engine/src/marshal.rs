//! Argument marshaling — VM cells to managed values
//!
//! Converts each argument cell of one call into a managed value according
//! to the call plan. Scalars pass the cell's bit pattern; strings and
//! arrays dereference indirect cells through [`VmMemory`] and deep-copy.
//! A failed indirection aborts the current call only — nothing here is
//! fatal to the process.

use pawnlink_sdk::{BridgeError, BridgeResult, Cell, ManagedArg, VmMemory};

use crate::classify::MarshalKind;
use crate::plan::{CallPlan, ParamDescriptor};

/// Marshal one call's argument cells into managed arguments, in plan
/// order. `args.len()` must equal the plan's parameter count — the count
/// the plan was built against.
pub fn marshal_args(
    plan: &CallPlan,
    args: &[Cell],
    memory: &dyn VmMemory,
) -> BridgeResult<Vec<ManagedArg>> {
    if args.len() != plan.param_count() {
        return Err(BridgeError::Arity {
            expected: plan.param_count(),
            got: args.len(),
        });
    }

    let mut out = Vec::with_capacity(plan.param_count());
    for (idx, descriptor) in plan.params.iter().enumerate() {
        out.push(marshal_one(descriptor, idx, args, memory)?);
    }
    Ok(out)
}

fn marshal_one(
    descriptor: &ParamDescriptor,
    idx: usize,
    args: &[Cell],
    memory: &dyn VmMemory,
) -> BridgeResult<ManagedArg> {
    let cell = args[idx];

    match descriptor.kind {
        MarshalKind::Int => Ok(ManagedArg::Int(cell.as_i32())),
        MarshalKind::Float => Ok(ManagedArg::Float(cell.as_f32())),
        MarshalKind::Bool => Ok(ManagedArg::Bool(cell.as_bool())),
        MarshalKind::String => marshal_string(cell, memory),
        MarshalKind::IntArray | MarshalKind::FloatArray | MarshalKind::BoolArray => {
            marshal_array(descriptor, cell, args, memory)
        }
    }
}

fn marshal_string(cell: Cell, memory: &dyn VmMemory) -> BridgeResult<ManagedArg> {
    let block = memory.resolve_indirect(cell)?;
    let len = memory.string_length(&block);

    if len == 0 {
        return Ok(ManagedArg::Str(String::new()));
    }

    // One extra element over the reported length, matching the VM's
    // terminator convention.
    Ok(ManagedArg::Str(memory.read_string(&block, len + 1)))
}

fn marshal_array(
    descriptor: &ParamDescriptor,
    cell: Cell,
    args: &[Cell],
    memory: &dyn VmMemory,
) -> BridgeResult<ManagedArg> {
    // Plan building guarantees a valid in-range index for array kinds.
    let count = match descriptor.length_index {
        Some(length_index) => args[length_index].as_i32(),
        None => 0,
    };

    // Zero or negative counts produce an empty array without touching
    // VM memory.
    if count <= 0 {
        return Ok(match descriptor.kind {
            MarshalKind::FloatArray => ManagedArg::FloatArray(Vec::new()),
            MarshalKind::BoolArray => ManagedArg::BoolArray(Vec::new()),
            _ => ManagedArg::IntArray(Vec::new()),
        });
    }

    let count = count as usize;
    let block = memory.resolve_indirect(cell)?;
    if block.len() < count {
        return Err(BridgeError::BadIndirection {
            cell: cell.raw() as u32,
        });
    }

    Ok(match descriptor.kind {
        MarshalKind::FloatArray => {
            ManagedArg::FloatArray(block[..count].iter().map(|c| c.as_f32()).collect())
        }
        MarshalKind::BoolArray => {
            ManagedArg::BoolArray(block[..count].iter().map(|c| c.as_bool()).collect())
        }
        _ => ManagedArg::IntArray(block[..count].iter().map(|c| c.as_i32()).collect()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawnlink_sdk::MethodId;
    use std::collections::HashMap;

    /// Memory stub: indirect cells index a map of blocks; strings are
    /// stored one byte per cell, NUL-terminated.
    struct MapMemory {
        blocks: HashMap<i32, Vec<Cell>>,
    }

    impl MapMemory {
        fn new() -> Self {
            Self {
                blocks: HashMap::new(),
            }
        }

        fn with_block(mut self, address: i32, cells: Vec<i32>) -> Self {
            self.blocks
                .insert(address, cells.into_iter().map(Cell::new).collect());
            self
        }
    }

    impl VmMemory for MapMemory {
        fn resolve_indirect(&self, cell: Cell) -> BridgeResult<Vec<Cell>> {
            self.blocks
                .get(&cell.raw())
                .cloned()
                .ok_or(BridgeError::BadIndirection {
                    cell: cell.raw() as u32,
                })
        }

        fn string_length(&self, cells: &[Cell]) -> usize {
            cells.iter().take_while(|c| c.raw() != 0).count()
        }

        fn read_string(&self, cells: &[Cell], limit: usize) -> String {
            cells
                .iter()
                .take(limit)
                .take_while(|c| c.raw() != 0)
                .map(|c| c.raw() as u8 as char)
                .collect()
        }
    }

    fn plan_of(params: Vec<ParamDescriptor>) -> CallPlan {
        CallPlan {
            method: MethodId(0),
            params,
        }
    }

    #[test]
    fn test_scalars_pass_bit_patterns() {
        let plan = plan_of(vec![
            ParamDescriptor::direct(MarshalKind::Int),
            ParamDescriptor::direct(MarshalKind::Float),
            ParamDescriptor::direct(MarshalKind::Bool),
        ]);
        let args = [Cell::new(-5), Cell::from_f32(2.5), Cell::new(3)];

        let marshaled = marshal_args(&plan, &args, &MapMemory::new()).unwrap();
        assert_eq!(marshaled[0], ManagedArg::Int(-5));
        assert_eq!(marshaled[1], ManagedArg::Float(2.5));
        assert_eq!(marshaled[2], ManagedArg::Bool(true));
    }

    #[test]
    fn test_string_copy() {
        let plan = plan_of(vec![ParamDescriptor::direct(MarshalKind::String)]);
        let memory = MapMemory::new().with_block(100, vec![b'h' as i32, b'i' as i32, 0]);

        let marshaled = marshal_args(&plan, &[Cell::new(100)], &memory).unwrap();
        assert_eq!(marshaled[0], ManagedArg::Str("hi".to_string()));
    }

    #[test]
    fn test_zero_length_string_is_empty_not_null() {
        let plan = plan_of(vec![ParamDescriptor::direct(MarshalKind::String)]);
        let memory = MapMemory::new().with_block(100, vec![0]);

        let marshaled = marshal_args(&plan, &[Cell::new(100)], &memory).unwrap();
        assert_eq!(marshaled[0], ManagedArg::Str(String::new()));
    }

    #[test]
    fn test_int_array_roundtrip() {
        let plan = plan_of(vec![
            ParamDescriptor::array(MarshalKind::IntArray, 1),
            ParamDescriptor::direct(MarshalKind::Int),
        ]);
        let memory = MapMemory::new().with_block(200, vec![10, 20, 30]);

        let marshaled = marshal_args(&plan, &[Cell::new(200), Cell::new(3)], &memory).unwrap();
        assert_eq!(marshaled[0], ManagedArg::IntArray(vec![10, 20, 30]));
    }

    #[test]
    fn test_empty_array_skips_indirection() {
        let plan = plan_of(vec![
            ParamDescriptor::array(MarshalKind::IntArray, 1),
            ParamDescriptor::direct(MarshalKind::Int),
        ]);
        // Address 999 is unmapped — resolving it would fail, proving the
        // zero-count path never dereferences.
        let marshaled =
            marshal_args(&plan, &[Cell::new(999), Cell::new(0)], &MapMemory::new()).unwrap();
        assert_eq!(marshaled[0], ManagedArg::IntArray(Vec::new()));
    }

    #[test]
    fn test_negative_count_is_empty_array() {
        let plan = plan_of(vec![
            ParamDescriptor::array(MarshalKind::BoolArray, 1),
            ParamDescriptor::direct(MarshalKind::Int),
        ]);
        let marshaled =
            marshal_args(&plan, &[Cell::new(999), Cell::new(-4)], &MapMemory::new()).unwrap();
        assert_eq!(marshaled[0], ManagedArg::BoolArray(Vec::new()));
    }

    #[test]
    fn test_float_array_bit_exact() {
        let values = [1.5f32, -0.125, 1024.0];
        let cells: Vec<i32> = values.iter().map(|f| Cell::from_f32(*f).raw()).collect();
        let memory = MapMemory::new().with_block(300, cells);

        let plan = plan_of(vec![
            ParamDescriptor::array(MarshalKind::FloatArray, 1),
            ParamDescriptor::direct(MarshalKind::Int),
        ]);
        let marshaled = marshal_args(&plan, &[Cell::new(300), Cell::new(3)], &memory).unwrap();

        let ManagedArg::FloatArray(decoded) = &marshaled[0] else {
            panic!("expected float array");
        };
        for (decoded, original) in decoded.iter().zip(values.iter()) {
            assert_eq!(decoded.to_bits(), original.to_bits());
        }
    }

    #[test]
    fn test_bool_array_normalization() {
        let memory = MapMemory::new().with_block(400, vec![0, 1, -9]);
        let plan = plan_of(vec![
            ParamDescriptor::array(MarshalKind::BoolArray, 1),
            ParamDescriptor::direct(MarshalKind::Int),
        ]);
        let marshaled = marshal_args(&plan, &[Cell::new(400), Cell::new(3)], &memory).unwrap();
        assert_eq!(marshaled[0], ManagedArg::BoolArray(vec![false, true, true]));
    }

    #[test]
    fn test_bad_indirection_faults() {
        let plan = plan_of(vec![ParamDescriptor::direct(MarshalKind::String)]);
        let result = marshal_args(&plan, &[Cell::new(12345)], &MapMemory::new());
        assert!(matches!(
            result,
            Err(BridgeError::BadIndirection { cell: 12345 })
        ));
    }

    #[test]
    fn test_arity_mismatch() {
        let plan = plan_of(vec![ParamDescriptor::direct(MarshalKind::Int)]);
        let result = marshal_args(&plan, &[], &MapMemory::new());
        assert!(matches!(
            result,
            Err(BridgeError::Arity {
                expected: 1,
                got: 0
            })
        ));
    }
}
