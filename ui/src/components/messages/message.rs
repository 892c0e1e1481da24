//! Display a message.
use crate::types::{Message as MessageData, MessageType};
use yew::prelude::*;

// ***************
// *** Message ***
// ***************

#[derive(Properties, PartialEq)]
pub struct MessageProps {
    #[prop_or_default]
    pub class: Classes,

    pub message: MessageData,
}

#[function_component(Message)]
pub fn message(props: &MessageProps) -> Html {
    let kind_class = match props.message.kind {
        MessageType::Info => "message-info",
        MessageType::Error => "message-error",
    };

    let class = classes!("tagpage-ui-message", kind_class, props.class.clone());

    html! {
        <div {class}>
            { &props.message.message }
        </div>
    }
}
