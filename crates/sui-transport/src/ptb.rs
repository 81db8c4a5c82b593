//! BCS mirror of the Sui programmable transaction kind.
//!
//! `sui_devInspectTransactionBlock` takes a base64 BCS `TransactionKind`. Only
//! the shapes needed to express a single Move call are mirrored here; variant
//! order matches `sui_types::transaction` so the derived BCS layout is
//! byte-identical to what the node expects.

use anyhow::{anyhow, Result};
use move_core_types::account_address::AccountAddress;
use move_core_types::language_storage::TypeTag;
use serde::Serialize;
use sui_profile_types::{CallInput, MoveCall, ObjectID};

/// `(object_id, version, digest)`.
pub type ObjectRef = (ObjectID, u64, Vec<u8>);

#[derive(Debug, Clone, Serialize)]
pub enum TransactionKind {
    ProgrammableTransaction(ProgrammableTransaction),
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgrammableTransaction {
    pub inputs: Vec<CallArg>,
    pub commands: Vec<Command>,
}

#[derive(Debug, Clone, Serialize)]
pub enum CallArg {
    Pure(Vec<u8>),
    Object(ObjectArg),
}

#[derive(Debug, Clone, Serialize)]
pub enum ObjectArg {
    ImmOrOwnedObject(ObjectRef),
    SharedObject {
        id: ObjectID,
        initial_shared_version: u64,
        mutable: bool,
    },
}

#[derive(Debug, Clone, Serialize)]
pub enum Command {
    MoveCall(Box<ProgrammableMoveCall>),
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgrammableMoveCall {
    pub package: ObjectID,
    pub module: String,
    pub function: String,
    pub type_arguments: Vec<TypeTag>,
    pub arguments: Vec<Argument>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub enum Argument {
    GasCoin,
    Input(u16),
    Result(u16),
    NestedResult(u16, u16),
}

/// Build the transaction kind for a single Move call.
///
/// `resolve_object` turns each object input into a full [`ObjectArg`].
pub fn build_move_call_kind(
    call: &MoveCall,
    mut resolve_object: impl FnMut(ObjectID) -> Result<ObjectArg>,
) -> Result<TransactionKind> {
    let mut inputs = Vec::with_capacity(call.arguments.len());
    let mut arguments = Vec::with_capacity(call.arguments.len());

    for (idx, input) in call.arguments.iter().enumerate() {
        let idx = u16::try_from(idx).map_err(|_| anyhow!("Too many call inputs"))?;
        let arg = match input {
            CallInput::Object(id) => CallArg::Object(resolve_object(*id)?),
            CallInput::Pure(bytes) => CallArg::Pure(bytes.clone()),
        };
        inputs.push(arg);
        arguments.push(Argument::Input(idx));
    }

    let command = Command::MoveCall(Box::new(ProgrammableMoveCall {
        package: call.package,
        module: call.module.clone(),
        function: call.function.clone(),
        type_arguments: call.type_arguments.clone(),
        arguments,
    }));

    Ok(TransactionKind::ProgrammableTransaction(
        ProgrammableTransaction {
            inputs,
            commands: vec![command],
        },
    ))
}

/// Encode a single Move call as BCS `TransactionKind` bytes.
pub fn encode_move_call(
    call: &MoveCall,
    resolve_object: impl FnMut(ObjectID) -> Result<ObjectArg>,
) -> Result<Vec<u8>> {
    let kind = build_move_call_kind(call, resolve_object)?;
    bcs::to_bytes(&kind).map_err(|e| anyhow!("Failed to encode {}: {}", call.target(), e))
}

/// Read-only shared object argument.
pub fn shared_readonly(id: AccountAddress, initial_shared_version: u64) -> ObjectArg {
    ObjectArg::SharedObject {
        id,
        initial_shared_version,
        mutable: false,
    }
}
