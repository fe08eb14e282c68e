/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// and other use cases use to interact with the evaluation core.
pub mod policy_evaluation_port;

pub use policy_evaluation_port::PolicyEvaluationPort;
