error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Json(::serde_json::Error);
        Req(::reqwest::Error) #[cfg(feature = "http-client")];
    }

    errors {
        InvalidUrl(url: String) {
            description("The given URL is not a roster or free agency page URL.")
            display("Invalid URL: {}", url)
        }

        LoginFailed(code: u16) {
            description("The login request did not return a success status.")
            display("Login failed! The login request returned status {}.", code)
        }

        NonSuccessStatus(code: u16) {
            description("The status code of a received response was not success.")
            display("The status code of a received response was {} and not success.",
                     code)
        }

        UnparseablePlayerRow(text: String) {
            description("A player row did not have the expected shape.")
            display("Could not extract player information from the row: {}", text)
        }
    }
}
