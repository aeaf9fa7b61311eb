//! Execution hand-off.
//!
//! The decoder does not model machine state. A consumer that wants to act on
//! decoded instructions (an interpreter, a tracer, a static analyser)
//! implements [`Executor`] and passes it to [`Instruction::execute`], which
//! dispatches to the one method matching the variant.

use crate::isa::instruction::{
    AddSubImmediate, AddrRef, BranchToRegister, CondBranchImmediate, ExceptionGen, Instruction,
    LogicalImmediate, Unallocated, Unimplemented,
};

/// Receives decoded instructions, one method per [`Instruction`] variant.
pub trait Executor {
    /// Value produced for each executed instruction.
    type Output;

    /// ADR / ADRP.
    fn addr_ref(&mut self, inst: &AddrRef) -> Self::Output;

    /// ADD, ADDS, SUB, SUBS (immediate).
    fn add_sub_immediate(&mut self, inst: &AddSubImmediate) -> Self::Output;

    /// AND, ORR, EOR, ANDS (immediate).
    fn logical_immediate(&mut self, inst: &LogicalImmediate) -> Self::Output;

    /// B.cond.
    fn cond_branch_immediate(&mut self, inst: &CondBranchImmediate) -> Self::Output;

    /// SVC, HVC, SMC, BRK, HLT, DCPS1-3.
    fn exception_gen(&mut self, inst: &ExceptionGen) -> Self::Output;

    /// Branches to a register.
    fn branch_to_register(&mut self, inst: &BranchToRegister) -> Self::Output;

    /// An unallocated encoding; typically raises an undefined-instruction exception.
    fn unallocated(&mut self, inst: &Unallocated) -> Self::Output;

    /// An encoding the decoder routes but does not decode.
    fn unimplemented(&mut self, inst: &Unimplemented) -> Self::Output;
}

impl Instruction {
    /// Hands this instruction to `executor`.
    pub fn execute<E: Executor + ?Sized>(&self, executor: &mut E) -> E::Output {
        match self {
            Self::AddrRef(i) => executor.addr_ref(i),
            Self::AddSubImmediate(i) => executor.add_sub_immediate(i),
            Self::LogicalImmediate(i) => executor.logical_immediate(i),
            Self::CondBranchImmediate(i) => executor.cond_branch_immediate(i),
            Self::ExceptionGen(i) => executor.exception_gen(i),
            Self::BranchToRegister(i) => executor.branch_to_register(i),
            Self::Unallocated(i) => executor.unallocated(i),
            Self::Unimplemented(i) => executor.unimplemented(i),
        }
    }
}
