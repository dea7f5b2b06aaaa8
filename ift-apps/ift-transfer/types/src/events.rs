//! Module events emitted by the IFT application.
//!
//! Every event carries a leading `module = ift` attribute so hosts can route
//! them alongside the events of other applications.
use ift_gmp_types::acknowledgement::AcknowledgementStatus;
use ift_primitives::prelude::*;
use ift_primitives::{ClientId, ModuleEvent, ModuleEventAttribute, Sequence, Signer};

use crate::{Amount, Denom, Memo, SendCallConstructor, TransferOutcome, MODULE_ID_STR};

const EVENT_TYPE_PACKET: &str = "ift_packet";
const EVENT_TYPE_TIMEOUT: &str = "ift_timeout";
const EVENT_TYPE_TRANSFER: &str = "ift_transfer";
const EVENT_TYPE_REGISTER_BRIDGE: &str = "ift_register_bridge";

fn ift_event(kind: &str, attributes: impl IntoIterator<Item = ModuleEventAttribute>) -> ModuleEvent {
    let mut all = vec![ModuleEventAttribute::from(("module", MODULE_ID_STR))];
    all.extend(attributes);
    ModuleEvent {
        kind: kind.to_string(),
        attributes: all,
    }
}

/// A transfer left this chain.
pub struct TransferEvent {
    pub sender: Signer,
    pub receiver: Signer,
    pub amount: Amount,
    pub denom: Denom,
    pub client_id: ClientId,
    pub sequence: Sequence,
    pub memo: Memo,
}

impl From<TransferEvent> for ModuleEvent {
    fn from(ev: TransferEvent) -> Self {
        ift_event(
            EVENT_TYPE_TRANSFER,
            [
                ("sender", ev.sender).into(),
                ("receiver", ev.receiver).into(),
                ("amount", ev.amount).into(),
                ("denom", ev.denom).into(),
                ("client_id", ev.client_id).into(),
                ("sequence", ev.sequence).into(),
                ("memo", ev.memo).into(),
            ],
        )
    }
}

/// An inbound transfer was processed. `success` is false when an error
/// acknowledgement was written instead of crediting the receiver.
pub struct RecvEvent {
    pub sender: Signer,
    pub receiver: Signer,
    pub denom: Denom,
    pub amount: Amount,
    pub memo: Memo,
    pub success: bool,
}

impl From<RecvEvent> for ModuleEvent {
    fn from(ev: RecvEvent) -> Self {
        ift_event(
            EVENT_TYPE_PACKET,
            [
                ("sender", ev.sender).into(),
                ("receiver", ev.receiver).into(),
                ("denom", ev.denom).into(),
                ("amount", ev.amount).into(),
                ("memo", ev.memo).into(),
                ("success", ev.success).into(),
            ],
        )
    }
}

/// An acknowledgement resolved a pending transfer.
pub struct AckEvent {
    pub sender: Signer,
    pub receiver: Signer,
    pub denom: Denom,
    pub amount: Amount,
    pub sequence: Sequence,
    pub outcome: TransferOutcome,
    pub acknowledgement: AcknowledgementStatus,
}

impl From<AckEvent> for ModuleEvent {
    fn from(ev: AckEvent) -> Self {
        ift_event(
            EVENT_TYPE_PACKET,
            [
                ("sender", ev.sender).into(),
                ("receiver", ev.receiver).into(),
                ("denom", ev.denom).into(),
                ("amount", ev.amount).into(),
                ("sequence", ev.sequence).into(),
                ("outcome", ev.outcome).into(),
                ("success", ev.acknowledgement.is_successful()).into(),
                ("acknowledgement", ev.acknowledgement).into(),
            ],
        )
    }
}

/// A timeout refunded a pending transfer.
pub struct TimeoutEvent {
    pub refund_receiver: Signer,
    pub refund_denom: Denom,
    pub refund_amount: Amount,
    pub sequence: Sequence,
}

impl From<TimeoutEvent> for ModuleEvent {
    fn from(ev: TimeoutEvent) -> Self {
        ift_event(
            EVENT_TYPE_TIMEOUT,
            [
                ("refund_receiver", ev.refund_receiver).into(),
                ("refund_denom", ev.refund_denom).into(),
                ("refund_amount", ev.refund_amount).into(),
                ("sequence", ev.sequence).into(),
            ],
        )
    }
}

pub struct RegisterBridgeEvent {
    pub denom: Denom,
    pub client_id: ClientId,
    pub counterparty_address: String,
    pub send_call_constructor: SendCallConstructor,
}

impl From<RegisterBridgeEvent> for ModuleEvent {
    fn from(ev: RegisterBridgeEvent) -> Self {
        ift_event(
            EVENT_TYPE_REGISTER_BRIDGE,
            [
                ("denom", ev.denom).into(),
                ("client_id", ev.client_id).into(),
                ("counterparty_address", ev.counterparty_address).into(),
                ("send_call_constructor", ev.send_call_constructor).into(),
            ],
        )
    }
}
