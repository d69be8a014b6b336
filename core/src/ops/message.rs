use serde_json::Value;

use crate::client::WppClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    Button, ButtonOptions, ContactVcard, MessageRef, SendButtons, SendFileBase64, SendImage, SendLinkPreview,
    SendLocation, SendMentioned, SendMessage, SendPath, SendReply, SendVoice,
};

impl<T: Transport> WppClient<T> {
    /// Send a file encoded as a data URI (`data:<mime>;base64,...`).
    /// `message` is omitted from the payload when `None`.
    pub fn send_file_base64(
        &self,
        phone: &str,
        base64: &str,
        message: Option<&str>,
        is_group: bool,
    ) -> Result<Value, ApiError> {
        let payload = SendFileBase64 {
            phone,
            base64,
            is_group,
            message,
        };
        self.call(Endpoint::SendFileBase64, &[], &payload)
    }

    /// Send an image from a path or URL the server can read.
    /// `caption` is omitted from the payload when `None`.
    pub fn send_image(&self, phone: &str, path: &str, caption: Option<&str>, is_group: bool) -> Result<Value, ApiError> {
        let payload = SendImage {
            phone,
            path,
            is_group,
            caption,
        };
        self.call(Endpoint::SendImage, &[], &payload)
    }

    pub fn send_voice(&self, phone: &str, base64_ptt: &str, is_group: bool) -> Result<Value, ApiError> {
        let payload = SendVoice {
            phone,
            base64_ptt,
            is_group,
        };
        self.call(Endpoint::SendVoiceBase64, &[], &payload)
    }

    pub fn send_reply(&self, phone: &str, message: &str, message_id: &str, is_group: bool) -> Result<Value, ApiError> {
        let payload = SendReply {
            phone,
            message,
            message_id,
            is_group,
        };
        self.call(Endpoint::SendReply, &[], &payload)
    }

    pub fn send_message(&self, phone: &str, message: &str, is_group: bool) -> Result<Value, ApiError> {
        let payload = SendMessage {
            phone,
            message,
            is_group,
        };
        self.call(Endpoint::SendMessage, &[], &payload)
    }

    /// Send a template-button message through the send-message route.
    pub fn send_buttons(
        &self,
        phone: &str,
        message: &str,
        buttons: &[Button],
        title: Option<&str>,
        footer: Option<&str>,
    ) -> Result<Value, ApiError> {
        let payload = SendButtons {
            phone,
            message,
            options: ButtonOptions {
                use_template_buttons: "true",
                buttons,
                title,
                footer,
            },
        };
        self.call(Endpoint::SendButtons, &[], &payload)
    }

    pub fn forward_messages(&self, phone: &str, message_id: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::ForwardMessages, &[], &MessageRef { phone, message_id })
    }

    pub fn contact_vcard(&self, phone: &str, contacts_id: &str, name: &str, is_group: bool) -> Result<Value, ApiError> {
        let payload = ContactVcard {
            phone,
            contacts_id,
            name,
            is_group,
        };
        self.call(Endpoint::ContactVcard, &[], &payload)
    }

    pub fn send_link_preview(&self, phone: &str, url: &str, caption: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::SendLinkPreview, &[], &SendLinkPreview { phone, url, caption })
    }

    pub fn send_location(&self, phone: &str, lat: f64, lng: f64, title: &str) -> Result<Value, ApiError> {
        let payload = SendLocation {
            phone,
            lat,
            lng,
            title,
        };
        self.call(Endpoint::SendLocation, &[], &payload)
    }

    /// Mention `mentioned` contacts in a group message.
    pub fn send_mentioned(&self, phone: &str, message: &str, mentioned: &[&str]) -> Result<Value, ApiError> {
        let payload = SendMentioned {
            phone,
            message,
            mentioned,
            is_group: true,
        };
        self.call(Endpoint::SendMentioned, &[], &payload)
    }

    pub fn send_sticker(&self, phone: &str, path: &str, is_group: bool) -> Result<Value, ApiError> {
        self.call(Endpoint::SendSticker, &[], &SendPath { phone, path, is_group })
    }

    pub fn send_sticker_gif(&self, phone: &str, path: &str, is_group: bool) -> Result<Value, ApiError> {
        self.call(Endpoint::SendStickerGif, &[], &SendPath { phone, path, is_group })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::http::HttpMethod;
    use crate::ops::test_support::{client, last, last_body, url};
    use crate::types::Button;

    const PHONE: &str = "5511999999999";

    #[test]
    fn send_image_without_caption_omits_the_key() {
        let client = client();
        client.send_image(PHONE, "/tmp/a.png", None, false).unwrap();
        let req = last(&client);
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, url("send-image"));
        assert_eq!(
            last_body(&client),
            json!({"phone": PHONE, "path": "/tmp/a.png", "isGroup": false})
        );
        assert!(!req.body.contains("caption"));
    }

    #[test]
    fn send_image_with_caption() {
        let client = client();
        client.send_image(PHONE, "/tmp/a.png", Some("hi"), true).unwrap();
        assert_eq!(
            last_body(&client),
            json!({"phone": PHONE, "path": "/tmp/a.png", "caption": "hi", "isGroup": true})
        );
    }

    #[test]
    fn send_image_with_empty_caption_omits_the_key() {
        let client = client();
        client.send_image(PHONE, "/tmp/a.png", Some(""), false).unwrap();
        assert_eq!(
            last_body(&client),
            json!({"phone": PHONE, "path": "/tmp/a.png", "isGroup": false})
        );
    }

    #[test]
    fn send_file_base64_optional_message() {
        let client = client();
        client.send_file_base64(PHONE, "data:text/plain;base64,aGk=", None, false).unwrap();
        assert_eq!(
            last_body(&client),
            json!({"phone": PHONE, "base64": "data:text/plain;base64,aGk=", "isGroup": false})
        );

        client.send_file_base64(PHONE, "data:text/plain;base64,aGk=", Some("file"), true).unwrap();
        assert_eq!(last_body(&client)["message"], "file");
        assert_eq!(last_body(&client)["isGroup"], true);
    }

    #[test]
    fn send_voice_uses_base64_route() {
        let client = client();
        client.send_voice(PHONE, "data:audio/ogg;base64,AAAA", false).unwrap();
        assert_eq!(last(&client).url, url("send-voice-base64"));
        assert_eq!(
            last_body(&client),
            json!({"phone": PHONE, "base64Ptt": "data:audio/ogg;base64,AAAA", "isGroup": false})
        );
    }

    #[test]
    fn text_and_reply() {
        let client = client();
        client.send_message(PHONE, "hello", false).unwrap();
        assert_eq!(last(&client).url, url("send-message"));
        assert_eq!(
            last_body(&client),
            json!({"phone": PHONE, "message": "hello", "isGroup": false})
        );

        client.send_reply(PHONE, "re", "msg-1", false).unwrap();
        assert_eq!(last(&client).url, url("send-reply"));
        assert_eq!(
            last_body(&client),
            json!({"phone": PHONE, "message": "re", "messageId": "msg-1", "isGroup": false})
        );
    }

    #[test]
    fn send_buttons_posts_to_send_message() {
        let client = client();
        let buttons = [Button::reply("1", "Yes"), Button::reply("2", "No")];
        client.send_buttons(PHONE, "Pick one", &buttons, Some("Poll"), None).unwrap();
        assert_eq!(last(&client).url, url("send-message"));
        assert_eq!(
            last_body(&client),
            json!({
                "phone": PHONE,
                "message": "Pick one",
                "options": {
                    "useTemplateButtons": "true",
                    "buttons": [{"id": "1", "text": "Yes"}, {"id": "2", "text": "No"}],
                    "title": "Poll"
                }
            })
        );
    }

    #[test]
    fn send_buttons_with_empty_title_and_footer() {
        let client = client();
        let buttons = [Button::reply("1", "Yes")];
        client.send_buttons(PHONE, "Pick", &buttons, Some(""), Some("")).unwrap();
        assert_eq!(
            last_body(&client)["options"],
            json!({"useTemplateButtons": "true", "buttons": [{"id": "1", "text": "Yes"}]})
        );
    }

    #[test]
    fn forward_and_vcard() {
        let client = client();
        client.forward_messages(PHONE, "msg-9").unwrap();
        assert_eq!(last(&client).url, url("forward-messages"));
        assert_eq!(last_body(&client), json!({"phone": PHONE, "messageId": "msg-9"}));

        client.contact_vcard(PHONE, "5511888888888", "Ana", false).unwrap();
        assert_eq!(
            last_body(&client),
            json!({"phone": PHONE, "contactsId": "5511888888888", "name": "Ana", "isGroup": false})
        );
    }

    #[test]
    fn link_preview_sends_the_callers_link() {
        let client = client();
        client.send_link_preview(PHONE, "https://example.com", "look").unwrap();
        assert_eq!(last(&client).url, url("send-link-preview"));
        assert_eq!(
            last_body(&client),
            json!({"phone": PHONE, "url": "https://example.com", "caption": "look"})
        );
    }

    #[test]
    fn location_and_mentions() {
        let client = client();
        client.send_location(PHONE, -23.5, -46.25, "Office").unwrap();
        assert_eq!(
            last_body(&client),
            json!({"phone": PHONE, "lat": -23.5, "lng": -46.25, "title": "Office"})
        );

        client.send_mentioned("123-456@g.us", "hey @5511", &["5511999999999"]).unwrap();
        assert_eq!(
            last_body(&client),
            json!({
                "phone": "123-456@g.us",
                "message": "hey @5511",
                "mentioned": ["5511999999999"],
                "isGroup": true
            })
        );
    }

    #[test]
    fn stickers() {
        let client = client();
        client.send_sticker(PHONE, "/tmp/s.webp", false).unwrap();
        assert_eq!(last(&client).url, url("send-sticker"));
        client.send_sticker_gif(PHONE, "/tmp/s.gif", true).unwrap();
        assert_eq!(last(&client).url, url("send-sticker-gif"));
        assert_eq!(
            last_body(&client),
            json!({"phone": PHONE, "path": "/tmp/s.gif", "isGroup": true})
        );
    }
}
