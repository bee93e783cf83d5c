/// Independent request streams; a new request only supersedes its own kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Search,
    Detail,
}

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    channel: Channel,
    generation: u64,
}

impl RequestToken {
    pub fn channel(&self) -> Channel {
        self.channel
    }
}

/// Hands out request tokens and remembers the latest one per channel
#[derive(Debug, Default)]
pub struct RequestTracker {
    search: u64,
    detail: u64,
}

impl RequestTracker {
    pub fn issue(&mut self, channel: Channel) -> RequestToken {
        let counter = self.counter(channel);
        *counter += 1;
        RequestToken {
            channel,
            generation: *counter,
        }
    }

    /// Whether no newer request was issued on the token's channel
    pub fn is_current(&self, token: RequestToken) -> bool {
        let latest = match token.channel {
            Channel::Search => self.search,
            Channel::Detail => self.detail,
        };
        latest == token.generation
    }

    fn counter(&mut self, channel: Channel) -> &mut u64 {
        match channel {
            Channel::Search => &mut self.search,
            Channel::Detail => &mut self.detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_request_supersedes_older() {
        let mut tracker = RequestTracker::default();
        let first = tracker.issue(Channel::Search);
        assert!(tracker.is_current(first));

        let second = tracker.issue(Channel::Search);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_channels_are_independent() {
        let mut tracker = RequestTracker::default();
        let search = tracker.issue(Channel::Search);
        let detail = tracker.issue(Channel::Detail);
        tracker.issue(Channel::Detail);

        assert!(tracker.is_current(search));
        assert!(!tracker.is_current(detail));
        assert_eq!(search.channel(), Channel::Search);
    }
}
