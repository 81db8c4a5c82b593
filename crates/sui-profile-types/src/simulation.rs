//! Read-only Move calls and their dev-inspect results.
//!
//! A [`MoveCall`] describes one `package::module::function` invocation with
//! its inputs. Object inputs are given by ID only; the transport resolves them
//! to full object arguments (e.g. the initial shared version) when it encodes
//! the transaction.

use move_core_types::language_storage::TypeTag;

use crate::ObjectID;

/// One input to a Move call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallInput {
    /// An on-chain object passed by reference.
    Object(ObjectID),
    /// A BCS-encoded pure value.
    Pure(Vec<u8>),
}

/// A single Move function call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCall {
    pub package: ObjectID,
    pub module: String,
    pub function: String,
    pub type_arguments: Vec<TypeTag>,
    pub arguments: Vec<CallInput>,
}

impl MoveCall {
    pub fn new(package: ObjectID, module: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            package,
            module: module.into(),
            function: function.into(),
            type_arguments: Vec::new(),
            arguments: Vec::new(),
        }
    }

    /// Builder: append an object argument.
    pub fn with_object(mut self, id: ObjectID) -> Self {
        self.arguments.push(CallInput::Object(id));
        self
    }

    /// Builder: append a pre-encoded pure argument.
    pub fn with_pure(mut self, bcs_bytes: Vec<u8>) -> Self {
        self.arguments.push(CallInput::Pure(bcs_bytes));
        self
    }

    /// Fully qualified target, e.g. `0x...::profile::get_profiles`.
    pub fn target(&self) -> String {
        format!(
            "{}::{}::{}",
            crate::address::address_to_string(&self.package),
            self.module,
            self.function
        )
    }
}

/// Values returned by one command of a simulated transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionResult {
    /// `(bcs_bytes, move_type)` for each return value, in declaration order.
    pub return_values: Vec<(Vec<u8>, String)>,
}

/// Outcome of a dev-inspect (read-only simulated) execution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DevInspectResults {
    /// Execution error reported by the node, if any.
    pub error: Option<String>,
    /// Per-command results; empty when execution did not get that far.
    pub results: Vec<ExecutionResult>,
}
